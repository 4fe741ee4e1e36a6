//! 评估文档生成
//!
//! 把章节/题目模型序列化为 QTI 1.2 评估文档。
//! 所有题目按章节-题目的文档顺序平铺进唯一的 section，
//! 章节边界不在 QTI 中单独表示。

use super::xml::Element;
use crate::models::{Chapter, Question, QuestionOption, QuestionType};
use chrono::Utc;

const QTI_XMLNS: &str = "http://www.imsglobal.org/xsd/ims_qtiasiv1p2";
const XSI_XMLNS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const QTI_SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/ims_qtiasiv1p2 \
                                   http://www.imsglobal.org/xsd/ims_qtiasiv1p2p1.xsd";

/// 生成评估文档
///
/// # 参数
/// - `chapters`: 解析出的章节模型
/// - `title`: 测验标题
///
/// # 返回
/// 返回评估文档 XML 文本。除了内嵌时间戳生成的评估标识符外，
/// 输出对同一模型完全确定。
pub fn generate_assessment(chapters: &[Chapter], title: &str) -> String {
    let ident = format!("assessment_{}", Utc::now().timestamp_millis());
    generate_assessment_with_ident(chapters, title, &ident)
}

/// 用指定标识符生成评估文档（测试需要确定性输出）
pub(crate) fn generate_assessment_with_ident(
    chapters: &[Chapter],
    title: &str,
    ident: &str,
) -> String {
    let mut section = Element::new("section").attr("ident", "root_section");
    for chapter in chapters {
        for question in &chapter.questions {
            section = section.child(question_item(chapter, question));
        }
    }

    Element::new("questestinterop")
        .attr("xmlns", QTI_XMLNS)
        .attr("xmlns:xsi", XSI_XMLNS)
        .attr("xsi:schemaLocation", QTI_SCHEMA_LOCATION)
        .child(
            Element::new("assessment")
                .attr("ident", ident)
                .attr("title", title)
                .child(
                    Element::new("qtimetadata")
                        .child(metadata_field("cc_maxattempts", "1")),
                )
                .child(section),
        )
        .to_document()
}

/// 生成单个题目的 item 元素
///
/// 标识符由章节号和题号拼出；输入里重复的编号会原样传递，
/// 产生重复标识符也不做去重。
fn question_item(chapter: &Chapter, question: &Question) -> Element {
    let item_ident = format!("question_{}_{}", chapter.number, question.number);
    let response_ident = format!("response_{item_ident}");

    Element::new("item")
        .attr("ident", &item_ident)
        .attr(
            "title",
            format!("Chapter {} - Q{}", chapter.number, question.number),
        )
        .child(item_metadata(question))
        .child(presentation(question, &item_ident, &response_ident))
        .child(response_processing(question, &item_ident, &response_ident))
}

fn metadata_field(label: &str, entry: impl Into<String>) -> Element {
    Element::new("qtimetadatafield")
        .child(Element::new("fieldlabel").text(label))
        .child(Element::new("fieldentry").text(entry))
}

fn item_metadata(question: &Question) -> Element {
    Element::new("itemmetadata").child(
        Element::new("qtimetadata")
            .child(metadata_field("question_type", question.kind.qti_name()))
            .child(metadata_field(
                "points_possible",
                question.kind.points_possible().to_string(),
            )),
    )
}

/// 题干 material 块
///
/// 题干以转义后的内联 HTML 形式嵌入（div/p 包裹）。
fn prompt_material(question: &Question) -> Element {
    Element::new("material").child(
        Element::new("mattext")
            .attr("texttype", "text/html")
            .text(format!("<div><p>{}</p></div>", question.text)),
    )
}

/// 按题型生成 presentation 块
fn presentation(question: &Question, item_ident: &str, response_ident: &str) -> Element {
    let base = Element::new("presentation").child(prompt_material(question));

    match question.kind {
        QuestionType::MultipleChoice | QuestionType::TrueFalse => base.child(
            choice_response(question, item_ident, response_ident, "Single"),
        ),
        QuestionType::MultipleAnswers => base.child(
            choice_response(question, item_ident, response_ident, "Multiple"),
        ),
        QuestionType::ShortAnswer => base.child(
            free_text_response(response_ident, Element::new("render_fib")),
        ),
        QuestionType::Essay => base.child(free_text_response(
            response_ident,
            Element::new("render_fib")
                .attr("fibtype", "String")
                .attr("rows", "10")
                .attr("columns", "80"),
        )),
        QuestionType::FileUpload => base.child(free_text_response(
            response_ident,
            Element::new("render_fib").attr("fibtype", "File"),
        )),
    }
}

fn choice_response(
    question: &Question,
    item_ident: &str,
    response_ident: &str,
    cardinality: &str,
) -> Element {
    let mut render = Element::new("render_choice");
    for (index, option) in question.options.iter().enumerate() {
        render = render.child(
            Element::new("response_label")
                .attr("ident", choice_ident(question.kind, item_ident, option, index))
                .child(
                    Element::new("material").child(
                        Element::new("mattext")
                            .attr("texttype", "text/plain")
                            .text(&option.text),
                    ),
                ),
        );
    }

    Element::new("response_lid")
        .attr("ident", response_ident)
        .attr("rcardinality", cardinality)
        .child(render)
}

fn free_text_response(response_ident: &str, render_fib: Element) -> Element {
    Element::new("response_str")
        .attr("ident", response_ident)
        .attr("rcardinality", "Single")
        .child(render_fib.child(Element::new("response_label").attr("ident", "answer1")))
}

/// 选项标识符
///
/// 单选类题型用字母，多选题用位置索引。
fn choice_ident(
    kind: QuestionType,
    item_ident: &str,
    option: &QuestionOption,
    index: usize,
) -> String {
    match option.letter {
        Some(letter) if kind.is_single_choice() => format!("{item_ident}_{letter}"),
        _ => format!("{item_ident}_{index}"),
    }
}

/// 按题型生成 resprocessing 块
fn response_processing(question: &Question, item_ident: &str, response_ident: &str) -> Element {
    let max_score = if question.kind.points_possible() > 0 {
        100
    } else {
        0
    };
    let mut processing = Element::new("resprocessing").child(scoring_outcomes(max_score));

    match question.kind {
        QuestionType::MultipleChoice | QuestionType::TrueFalse => {
            // 只有第一个被标记的正确选项进入评分条件；
            // 无正确选项时不生成条件（分值仍按输入报告为 1）
            if let Some((index, option)) = question
                .options
                .iter()
                .enumerate()
                .find(|(_, option)| option.is_correct)
            {
                let correct_ident = choice_ident(question.kind, item_ident, option, index);
                processing = processing.child(full_score_condition(
                    Element::new("varequal")
                        .attr("respident", response_ident)
                        .text(correct_ident),
                ));
            }
        }
        QuestionType::MultipleAnswers => {
            // 全匹配条件：选中全部正确项，且不选中任何错误项，无部分得分
            let mut conjunction = Element::new("and");
            for (index, option) in question.options.iter().enumerate() {
                let varequal = Element::new("varequal")
                    .attr("respident", response_ident)
                    .text(format!("{item_ident}_{index}"));
                conjunction = conjunction.child(if option.is_correct {
                    varequal
                } else {
                    Element::new("not").child(varequal)
                });
            }
            processing = processing.child(full_score_condition(conjunction));
        }
        QuestionType::ShortAnswer => {
            // 每个可接受答案一个独立条件，大小写不敏感的精确匹配
            for answer in &question.answers {
                processing = processing.child(full_score_condition(
                    Element::new("varequal")
                        .attr("respident", response_ident)
                        .attr("case", "no")
                        .text(answer),
                ));
            }
        }
        // 人工评分题型没有评分条件
        QuestionType::Essay | QuestionType::FileUpload => {}
    }

    processing
}

fn scoring_outcomes(max_score: u32) -> Element {
    Element::new("outcomes").child(
        Element::new("decvar")
            .attr("maxvalue", max_score.to_string())
            .attr("minvalue", "0")
            .attr("varname", "SCORE")
            .attr("vartype", "Decimal"),
    )
}

fn full_score_condition(condition: Element) -> Element {
    Element::new("respcondition")
        .attr("continue", "No")
        .child(Element::new("conditionvar").child(condition))
        .child(
            Element::new("setvar")
                .attr("action", "Set")
                .attr("varname", "SCORE")
                .text("100"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 创建测试用的单题章节
    fn single_question_chapter(question: Question) -> Vec<Chapter> {
        vec![Chapter {
            number: 1,
            title: "Test".to_string(),
            questions: vec![question],
        }]
    }

    fn option(letter: char, text: &str, is_correct: bool) -> QuestionOption {
        QuestionOption {
            letter: Some(letter),
            text: text.to_string(),
            is_correct,
        }
    }

    fn plain_option(text: &str, is_correct: bool) -> QuestionOption {
        QuestionOption {
            letter: None,
            text: text.to_string(),
            is_correct,
        }
    }

    #[test]
    fn test_fixed_ident_output_is_byte_identical() {
        let mut question = Question::new(1, "Pick.", QuestionType::MultipleChoice);
        question.options.push(option('a', "x", true));
        let chapters = single_question_chapter(question);

        let first = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");
        let second = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_skeleton() {
        let chapters = single_question_chapter(Question::new(
            2,
            "Prompt",
            QuestionType::MultipleChoice,
        ));
        let xml = generate_assessment_with_ident(&chapters, "My Quiz", "assessment_0");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<questestinterop xmlns=\"http://www.imsglobal.org/xsd/ims_qtiasiv1p2\""));
        assert!(xml.contains("<assessment ident=\"assessment_0\" title=\"My Quiz\">"));
        assert!(xml.contains("<fieldlabel>cc_maxattempts</fieldlabel>"));
        assert!(xml.contains("<section ident=\"root_section\">"));
        assert!(xml.contains("<item ident=\"question_1_2\" title=\"Chapter 1 - Q2\">"));
    }

    #[test]
    fn test_prompt_is_embedded_as_escaped_html() {
        let chapters = single_question_chapter(Question::new(
            1,
            "Is 1 < 2 & 3 > 2?",
            QuestionType::MultipleChoice,
        ));
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        assert!(xml.contains(
            "&lt;div&gt;&lt;p&gt;Is 1 &lt; 2 &amp; 3 &gt; 2?&lt;/p&gt;&lt;/div&gt;"
        ));
        // 内容位置不允许出现未转义字符
        assert!(!xml.contains("<div><p>"));
    }

    #[test]
    fn test_multiple_choice_scores_first_correct_only() {
        let mut question = Question::new(1, "Pick.", QuestionType::MultipleChoice);
        question.options.push(option('a', "first", true));
        question.options.push(option('b', "second", true));
        question.options.push(option('c', "third", false));
        let chapters = single_question_chapter(question);
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        assert!(xml.contains("rcardinality=\"Single\""));
        // 只为第一个正确选项生成条件
        assert!(xml.contains(">question_1_1_a</varequal>"));
        assert!(!xml.contains(">question_1_1_b</varequal>"));
        assert_eq!(xml.matches("<respcondition").count(), 1);
    }

    #[test]
    fn test_multiple_choice_without_correct_option_has_no_condition() {
        let mut question = Question::new(1, "Pick.", QuestionType::MultipleChoice);
        question.options.push(option('a', "x", false));
        question.options.push(option('b', "y", false));
        let chapters = single_question_chapter(question);
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        // 无条件生成，但分值仍原样报告为 1
        assert!(!xml.contains("<respcondition"));
        assert!(xml.contains("<fieldentry>1</fieldentry>"));
    }

    #[test]
    fn test_multiple_answers_requires_exact_subset() {
        let mut question = Question::new(1, "Select.", QuestionType::MultipleAnswers);
        question.options.push(plain_option("A", true));
        question.options.push(plain_option("B", false));
        let chapters = single_question_chapter(question);
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        assert!(xml.contains("rcardinality=\"Multiple\""));
        // A 必须选中
        assert!(xml.contains(">question_1_1_0</varequal>"));
        // B 必须不选中（包裹在 not 里）
        let not_start = xml.find("<not>").expect("缺少 not 元素");
        let not_end = xml.find("</not>").expect("缺少 not 结束标签");
        assert!(xml[not_start..not_end].contains("question_1_1_1"));
        assert_eq!(xml.matches("<and>").count(), 1);
    }

    #[test]
    fn test_short_answer_three_spellings() {
        let mut question = Question::new(3, "Who lives at the North Pole?", QuestionType::ShortAnswer);
        question.answers = vec![
            "Santa".to_string(),
            "Santa Claus".to_string(),
            "Father Christmas".to_string(),
        ];
        let chapters = single_question_chapter(question);
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        // 三个独立的大小写不敏感条件，每个都给满分
        assert_eq!(xml.matches("<respcondition continue=\"No\">").count(), 3);
        assert_eq!(xml.matches("case=\"no\"").count(), 3);
        assert!(xml.contains(">Santa</varequal>"));
        assert!(xml.contains(">Santa Claus</varequal>"));
        assert!(xml.contains(">Father Christmas</varequal>"));
        assert_eq!(xml.matches(">100</setvar>").count(), 3);
        assert!(xml.contains("<render_fib>"));
        assert!(xml.contains("<response_label ident=\"answer1\"/>"));
    }

    #[test]
    fn test_essay_and_file_upload_are_unscored() {
        let mut chapters = single_question_chapter(Question::new(1, "Discuss.", QuestionType::Essay));
        chapters[0]
            .questions
            .push(Question::new(2, "Upload.", QuestionType::FileUpload));
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        assert!(!xml.contains("<respcondition"));
        assert_eq!(xml.matches("maxvalue=\"0\"").count(), 2);
        assert_eq!(xml.matches("<fieldentry>0</fieldentry>").count(), 2);
        assert!(xml.contains("fibtype=\"String\" rows=\"10\" columns=\"80\""));
        assert!(xml.contains("fibtype=\"File\""));
    }

    #[test]
    fn test_items_flattened_in_document_order() {
        let chapters = vec![
            Chapter {
                number: 1,
                title: "One".to_string(),
                questions: vec![
                    Question::new(1, "a", QuestionType::Essay),
                    Question::new(2, "b", QuestionType::Essay),
                ],
            },
            Chapter {
                number: 2,
                title: "Two".to_string(),
                questions: vec![Question::new(1, "c", QuestionType::Essay)],
            },
        ];
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        let first = xml.find("question_1_1").expect("缺少第一题");
        let second = xml.find("question_1_2").expect("缺少第二题");
        let third = xml.find("question_2_1").expect("缺少第三题");
        assert!(first < second && second < third);
        // 只有一个 section，章节不单独分组
        assert_eq!(xml.matches("<section").count(), 1);
    }

    #[test]
    fn test_option_text_is_escaped() {
        let mut question = Question::new(1, "Pick.", QuestionType::MultipleChoice);
        question.options.push(option('a', "salt & pepper", false));
        let chapters = single_question_chapter(question);
        let xml = generate_assessment_with_ident(&chapters, "Quiz", "assessment_0");

        assert!(xml.contains("salt &amp; pepper"));
        assert!(!xml.contains("salt & pepper"));
    }
}
