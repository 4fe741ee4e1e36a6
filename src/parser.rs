//! 测验文本解析模块
//!
//! 负责把人工书写的纯文本测验转换为章节/题目模型。
//!
//! 解析对任意输入都是全函数：格式错误的行被静默跳过，
//! 解析不出任何题目时返回空序列，永远不会失败。

use crate::models::{Chapter, Question, QuestionOption, QuestionType};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 输入中没有章节标题时使用的默认章节标题
pub const DEFAULT_CHAPTER_TITLE: &str = "Quiz Questions";

/// 题型推断的前瞻窗口（非空行数）
const TYPE_LOOKAHEAD_LINES: usize = 10;

/// 章节标题行，如 `### **Chapter 1: Sample Questions**`
static CHAPTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)###\s*\*\*chapter\s+(\d+):\s*([^*]+)\*\*").expect("合法正则"));

/// 题目起始行，如 `1. What is 2+3?`
static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)").expect("合法正则"));

/// 单选/判断题选项行，如 `*c) 5`
static CHOICE_OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*?([a-d])\)\s+(.+)").expect("合法正则"));

/// 多选题选项行，如 `[*] Triceratops`
static MULTI_OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([* ]?)\]\s+(.+)").expect("合法正则"));

/// 简答题答案行，如 `* Santa Claus`
static SHORT_ANSWER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s+(.+)").expect("合法正则"));

// ---- 题型推断用的标记行 ----

/// 论述题标记：单独一行 3-4 个 `#`
static ESSAY_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{3,4}$").expect("合法正则"));

/// 文件上传题标记：单独一行 3-4 个 `^`
static FILE_UPLOAD_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\^{3,4}$").expect("合法正则"));

/// 多选题标记：`[ ]` 或 `[*]` 开头
static MULTI_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[* ]?\]").expect("合法正则"));

/// 简答题标记：`*` 后跟空白和非 a-d 字符
static SHORT_ANSWER_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\s+[^a-d]").expect("合法正则"));

/// 判断题标记：`a)`/`b)` 后跟 True/False（不区分大小写）
static TRUE_FALSE_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\*?[ab]\)\s+(?:true|false)").expect("合法正则"));

/// 单选题标记：`a)` 到 `d)` 开头
static CHOICE_MARK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*?[a-d]\)").expect("合法正则"));

/// 解析完整的测验文本
///
/// # 参数
/// - `text`: 原始测验文本
///
/// # 返回
/// 返回章节列表。没有章节标题时整个输入作为编号为 1 的隐式章节；
/// 解析不出题目的章节会被丢弃。
pub fn parse_quiz_text(text: &str) -> Vec<Chapter> {
    let headings: Vec<(std::ops::Range<usize>, u32, String)> = CHAPTER_RE
        .captures_iter(text)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let number = cap.get(1)?.as_str().parse().ok()?;
            let title = cap.get(2)?.as_str().trim().to_string();
            Some((whole.range(), number, title))
        })
        .collect();

    if headings.is_empty() {
        let questions = parse_questions(text);
        if questions.is_empty() {
            return Vec::new();
        }
        return vec![Chapter {
            number: 1,
            title: DEFAULT_CHAPTER_TITLE.to_string(),
            questions,
        }];
    }

    let mut chapters = Vec::new();
    for (i, (range, number, title)) in headings.iter().enumerate() {
        let end = headings
            .get(i + 1)
            .map(|(next, _, _)| next.start)
            .unwrap_or(text.len());

        let questions = parse_questions(&text[range.end..end]);
        debug!("章节 {} \"{}\": 解析出 {} 道题目", number, title, questions.len());

        // 没有题目的章节不输出
        if !questions.is_empty() {
            chapters.push(Chapter {
                number: *number,
                title: title.clone(),
                questions,
            });
        }
    }

    chapters
}

/// 解析单个章节范围内的题目
///
/// 逐行扫描，用显式的"进行中题目"累加器串联：
/// 遇到新题目起始行时冲刷上一道题，范围结束时冲刷最后一道。
fn parse_questions(text: &str) -> Vec<Question> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut questions = Vec::new();
    let mut current: Option<Question> = None;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if let Some(cap) = QUESTION_RE.captures(line) {
            if let Some(number) = cap.get(1).and_then(|m| m.as_str().parse().ok()) {
                if let Some(done) = current.take() {
                    questions.push(done);
                }

                let text = cap.get(2).map(|m| m.as_str()).unwrap_or_default();
                // 题型在开题时一次性锁定，后续内容行只按该题型解析
                let kind = detect_question_type(&lines, i + 1);
                current = Some(Question::new(number, text, kind));
                continue;
            }
        }

        if let Some(question) = current.as_mut() {
            collect_content_line(question, line);
        }
    }

    if let Some(done) = current.take() {
        questions.push(done);
    }

    questions
}

/// 推断题型
///
/// 向后扫描至多 10 个非空行，按固定优先级取第一个命中的模式。
/// 优先级顺序不能改动：判断题选项行同时也能匹配通用选项模式，
/// 所以判断题必须先于单选题检查。窗口内无命中时默认单选题。
fn detect_question_type(lines: &[&str], start: usize) -> QuestionType {
    let mut examined = 0;

    for raw in lines.iter().skip(start) {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if ESSAY_MARK_RE.is_match(line) {
            return QuestionType::Essay;
        }
        if FILE_UPLOAD_MARK_RE.is_match(line) {
            return QuestionType::FileUpload;
        }
        if MULTI_MARK_RE.is_match(line) {
            return QuestionType::MultipleAnswers;
        }
        if SHORT_ANSWER_MARK_RE.is_match(line) {
            return QuestionType::ShortAnswer;
        }
        if TRUE_FALSE_MARK_RE.is_match(line) {
            return QuestionType::TrueFalse;
        }
        if CHOICE_MARK_RE.is_match(line) {
            return QuestionType::MultipleChoice;
        }

        examined += 1;
        if examined >= TYPE_LOOKAHEAD_LINES {
            break;
        }
    }

    QuestionType::MultipleChoice
}

/// 按已锁定的题型解析一行内容
///
/// 不匹配当前题型模式的行一律忽略，包括恰好匹配其他题型模式的行。
fn collect_content_line(question: &mut Question, line: &str) {
    match question.kind {
        QuestionType::MultipleChoice | QuestionType::TrueFalse => {
            if let Some(cap) = CHOICE_OPTION_RE.captures(line) {
                let is_correct = line.starts_with('*');
                let letter = cap.get(1).and_then(|m| m.as_str().chars().next());
                let text = cap.get(2).map(|m| m.as_str()).unwrap_or_default();

                if is_correct {
                    if let Some(letter) = letter {
                        question.correct_answers.push(letter.to_string());
                    }
                }
                question.options.push(QuestionOption {
                    letter,
                    text: text.to_string(),
                    is_correct,
                });
            }
        }
        QuestionType::MultipleAnswers => {
            if let Some(cap) = MULTI_OPTION_RE.captures(line) {
                let is_correct = cap.get(1).is_some_and(|m| m.as_str() == "*");
                let text = cap
                    .get(2)
                    .map(|m| m.as_str())
                    .unwrap_or_default()
                    .to_string();

                if is_correct {
                    question.correct_answers.push(text.clone());
                }
                question.options.push(QuestionOption {
                    letter: None,
                    text,
                    is_correct,
                });
            }
        }
        QuestionType::ShortAnswer => {
            if let Some(cap) = SHORT_ANSWER_RE.captures(line) {
                if let Some(answer) = cap.get(1) {
                    question.answers.push(answer.as_str().trim().to_string());
                }
            }
        }
        // 论述题和文件上传题不消费任何内容行
        QuestionType::Essay | QuestionType::FileUpload => {}
    }
}
