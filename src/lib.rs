//! # Quiz QTI Convert
//!
//! 把轻量标记的纯文本测验转换为 LMS 可导入的 QTI 包
//!
//! ## 架构设计
//!
//! 本系统是"解析器喂序列化器"的两段式流水线：
//!
//! ### ① 解析层（Parser）
//! - `parser` - 原始文本 → 章节/题目模型
//! - 题型由内容行形状推断，不靠显式声明
//! - 对任意输入都不失败，坏行静默跳过
//!
//! ### ② 模型层（Models）
//! - `models` - Chapter / Question / QuestionOption / QuestionType
//! - 一次解析的不可变产物，序列化后即丢弃
//!
//! ### ③ 序列化层（QTI）
//! - `qti` - 模型 → 评估文档 + 清单文档
//! - `qti::xml` - 结构化构建器，统一转义
//!
//! ### ④ 外围（Periphery）
//! - `preview` - 模型的只读 HTML 摘要
//! - `package` - 文档对 + 派生包名（容器格式归调用方）
//! - `sample` - 首次运行预填的示例测验
//!
//! ## 处理流程
//!
//! ```text
//! 原始文本 → parser → Vec<Chapter> → qti::serialize → (assessment, manifest)
//!                                  → preview::render_preview（可选）
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod package;
pub mod parser;
pub mod preview;
pub mod qti;
pub mod sample;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Chapter, Question, QuestionOption, QuestionType};
pub use package::{package_base_name, QtiPackage, ASSESSMENT_FILE_NAME, MANIFEST_FILE_NAME};
pub use parser::{parse_quiz_text, DEFAULT_CHAPTER_TITLE};
pub use preview::render_preview;
pub use qti::{serialize, QtiDocuments};
pub use sample::SAMPLE_QUIZ;
