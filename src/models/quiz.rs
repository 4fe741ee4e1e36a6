use serde::{Deserialize, Serialize};

/// 题型枚举
///
/// 题型不是由输入声明的，而是由解析器根据题目后续行的形状推断出来的。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// 单选题
    MultipleChoice,
    /// 判断题
    TrueFalse,
    /// 多选题
    MultipleAnswers,
    /// 简答题
    ShortAnswer,
    /// 论述题（人工评分）
    Essay,
    /// 文件上传题（人工评分）
    FileUpload,
}

impl QuestionType {
    /// 获取 QTI 元数据中使用的题型名称
    pub fn qti_name(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple_choice_question",
            QuestionType::TrueFalse => "true_false_question",
            QuestionType::MultipleAnswers => "multiple_answers_question",
            QuestionType::ShortAnswer => "short_answer_question",
            QuestionType::Essay => "essay_question",
            QuestionType::FileUpload => "file_upload_question",
        }
    }

    /// 获取预览中显示的题型标签
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "Multiple Choice",
            QuestionType::TrueFalse => "True/False",
            QuestionType::MultipleAnswers => "Multiple Answers",
            QuestionType::ShortAnswer => "Short Answer",
            QuestionType::Essay => "Essay",
            QuestionType::FileUpload => "File Upload",
        }
    }

    /// 获取题目分值
    ///
    /// 论述题和文件上传题始终为 0 分（人工评分）
    pub fn points_possible(self) -> u32 {
        match self {
            QuestionType::Essay | QuestionType::FileUpload => 0,
            _ => 1,
        }
    }

    /// 是否为选择类题型（single cardinality）
    pub fn is_single_choice(self) -> bool {
        matches!(self, QuestionType::MultipleChoice | QuestionType::TrueFalse)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    /// 选项字母（a-d），多选题选项没有字母
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    /// 选项文本
    pub text: String,
    /// 是否为正确选项
    pub is_correct: bool,
}

/// 题目
///
/// 题号原样保留，不保证唯一或连续，仅用于显示和生成标识符。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    /// 选项列表（仅选择类题型非空）
    #[serde(default)]
    pub options: Vec<QuestionOption>,
    /// 正确答案标记（单选为字母，多选为选项文本）
    #[serde(default)]
    pub correct_answers: Vec<String>,
    /// 简答题的可接受答案列表
    #[serde(default)]
    pub answers: Vec<String>,
}

impl Question {
    /// 创建指定题型的空题目
    pub fn new(number: u32, text: impl Into<String>, kind: QuestionType) -> Self {
        Self {
            number,
            text: text.into(),
            kind,
            options: Vec::new(),
            correct_answers: Vec::new(),
            answers: Vec::new(),
        }
    }
}

/// 章节
///
/// 章节独占其题目，题目顺序即文档顺序。解析结果中不会出现空章节。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qti_name_roundtrip_with_serde() {
        // serde 的 snake_case 重命名应与 QTI 名称前缀一致
        let json = serde_json::to_string(&QuestionType::MultipleAnswers).unwrap();
        assert_eq!(json, "\"multiple_answers\"");
        assert_eq!(
            QuestionType::MultipleAnswers.qti_name(),
            "multiple_answers_question"
        );
    }

    #[test]
    fn test_points_possible() {
        assert_eq!(QuestionType::MultipleChoice.points_possible(), 1);
        assert_eq!(QuestionType::TrueFalse.points_possible(), 1);
        assert_eq!(QuestionType::MultipleAnswers.points_possible(), 1);
        assert_eq!(QuestionType::ShortAnswer.points_possible(), 1);
        assert_eq!(QuestionType::Essay.points_possible(), 0);
        assert_eq!(QuestionType::FileUpload.points_possible(), 0);
    }

    #[test]
    fn test_is_single_choice() {
        assert!(QuestionType::MultipleChoice.is_single_choice());
        assert!(QuestionType::TrueFalse.is_single_choice());
        assert!(!QuestionType::MultipleAnswers.is_single_choice());
        assert!(!QuestionType::Essay.is_single_choice());
    }
}
