//! 预览渲染模块
//!
//! 把章节/题目模型渲染为只读的 HTML 摘要，供转换前人工检查。
//! 插入的用户文本与序列化器使用同一套转义规则。

use crate::models::{Chapter, QuestionType};
use crate::qti::xml::escape_xml;

/// 模型为空时的占位内容
const EMPTY_PLACEHOLDER: &str =
    "<div class=\"empty-state\"><p>No valid questions found. Please check your format.</p></div>";

/// 渲染预览 HTML 片段
pub fn render_preview(chapters: &[Chapter]) -> String {
    if chapters.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut html = String::new();

    for chapter in chapters {
        html.push_str("<div class=\"preview-chapter\">");
        html.push_str(&format!(
            "<h3>Chapter {}: {}</h3>",
            chapter.number,
            escape_xml(&chapter.title)
        ));

        for question in &chapter.questions {
            html.push_str("<div class=\"preview-question\">");
            html.push_str(&format!(
                "<div class=\"question-text\">{}. {} <span class=\"question-type-badge\">{}</span></div>",
                question.number,
                escape_xml(&question.text),
                question.kind.label()
            ));

            match question.kind {
                QuestionType::MultipleChoice | QuestionType::TrueFalse => {
                    html.push_str("<ul class=\"options\">");
                    for option in &question.options {
                        let class = if option.is_correct { " correct" } else { "" };
                        let letter = option.letter.map(String::from).unwrap_or_default();
                        html.push_str(&format!(
                            "<li class=\"option{}\">{}) {}</li>",
                            class,
                            letter,
                            escape_xml(&option.text)
                        ));
                    }
                    html.push_str("</ul>");
                }
                QuestionType::MultipleAnswers => {
                    html.push_str("<ul class=\"options\">");
                    for option in &question.options {
                        let (class, marker) = if option.is_correct {
                            (" correct", "[✓]")
                        } else {
                            ("", "[ ]")
                        };
                        html.push_str(&format!(
                            "<li class=\"option{}\">{} {}</li>",
                            class,
                            marker,
                            escape_xml(&option.text)
                        ));
                    }
                    html.push_str("</ul>");
                }
                QuestionType::ShortAnswer => {
                    html.push_str(
                        "<div class=\"short-answers\"><p><strong>Accepted answers:</strong></p><ul class=\"options\">",
                    );
                    for answer in &question.answers {
                        html.push_str(&format!(
                            "<li class=\"option correct\">{}</li>",
                            escape_xml(answer)
                        ));
                    }
                    html.push_str("</ul></div>");
                }
                QuestionType::Essay => {
                    html.push_str(
                        "<p class=\"essay-note\">Essay response (manual grading required)</p>",
                    );
                }
                QuestionType::FileUpload => {
                    html.push_str(
                        "<p class=\"file-note\">File upload (manual grading required)</p>",
                    );
                }
            }

            html.push_str("</div>");
        }

        html.push_str("</div>");
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_quiz_text;

    #[test]
    fn test_empty_model_renders_placeholder() {
        assert_eq!(render_preview(&[]), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn test_choice_options_mark_correct() {
        let chapters = parse_quiz_text("1. What is 2+3?\na) 6\n*c) 5\n");
        let html = render_preview(&chapters);

        assert!(html.contains("<h3>Chapter 1: Quiz Questions</h3>"));
        assert!(html.contains("Multiple Choice"));
        assert!(html.contains("<li class=\"option\">a) 6</li>"));
        assert!(html.contains("<li class=\"option correct\">c) 5</li>"));
    }

    #[test]
    fn test_multiple_answers_markers() {
        let chapters = parse_quiz_text("1. Dinosaurs?\n[ ] Mammoth\n[*] Triceratops\n");
        let html = render_preview(&chapters);

        assert!(html.contains("[ ] Mammoth"));
        assert!(html.contains("[✓] Triceratops"));
    }

    #[test]
    fn test_short_answer_lists_accepted_answers() {
        let chapters = parse_quiz_text("1. Who?\n* Santa\n* Father Christmas\n");
        let html = render_preview(&chapters);

        assert!(html.contains("Accepted answers:"));
        assert!(html.contains("<li class=\"option correct\">Santa</li>"));
        assert!(html.contains("<li class=\"option correct\">Father Christmas</li>"));
    }

    #[test]
    fn test_manual_grading_notices() {
        let chapters = parse_quiz_text("1. Discuss.\n###\n\n2. Upload.\n^^^\n");
        let html = render_preview(&chapters);

        assert!(html.contains("Essay response (manual grading required)"));
        assert!(html.contains("File upload (manual grading required)"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let chapters = parse_quiz_text("1. Is <b> \"bold\" & 'ok'?\na) yes <i>\n");
        let html = render_preview(&chapters);

        assert!(html.contains("Is &lt;b&gt; &quot;bold&quot; &amp; &apos;ok&apos;?"));
        assert!(html.contains("yes &lt;i&gt;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<i>"));
    }
}
