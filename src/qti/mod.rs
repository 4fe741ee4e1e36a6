//! QTI 序列化层
//!
//! ## 职责
//!
//! 把解析得到的章节/题目模型转换为两份 XML 文档：
//!
//! ### `assessment` - 评估文档
//! - 所有题目平铺进唯一 section（章节不分组）
//! - 按题型生成作答块和评分条件
//!
//! ### `manifest` - 清单文档
//! - 固定形状的包描述符，按文件名引用评估文档
//!
//! ### `xml` - 结构化构建器
//! - 元素/属性/文本节点树，统一转义后在边界序列化
//!
//! 序列化对满足模型不变量的任何值都不会失败；
//! 除评估标识符内嵌的生成时间戳外输出完全确定。

pub mod xml;

mod assessment;
mod manifest;

pub use assessment::generate_assessment;
pub use manifest::generate_manifest;

use crate::models::Chapter;

/// 一次序列化产出的文档对
#[derive(Debug, Clone)]
pub struct QtiDocuments {
    /// 评估文档 XML
    pub assessment: String,
    /// 清单文档 XML
    pub manifest: String,
}

/// 序列化模型为评估文档和清单文档
///
/// # 参数
/// - `chapters`: 章节模型
/// - `title`: 测验标题
pub fn serialize(chapters: &[Chapter], title: &str) -> QtiDocuments {
    QtiDocuments {
        assessment: generate_assessment(chapters, title),
        manifest: generate_manifest(crate::package::ASSESSMENT_FILE_NAME),
    }
}
