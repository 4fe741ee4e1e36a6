//! 打包模块
//!
//! 把一次序列化产出的文档对和派生的包名组合在一起。
//! 核心只负责"文档 + 建议文件名"，容器格式（ZIP 等）由调用方决定。

use crate::qti::QtiDocuments;

/// 包内评估文档的固定文件名
pub const ASSESSMENT_FILE_NAME: &str = "assessment.xml";

/// 包内清单文档的固定文件名
pub const MANIFEST_FILE_NAME: &str = "imsmanifest.xml";

/// 包名后缀
const PACKAGE_SUFFIX: &str = "_qti";

/// 一个待交付的 QTI 包
#[derive(Debug, Clone)]
pub struct QtiPackage {
    /// 由标题派生的包基础名（不含容器扩展名）
    pub base_name: String,
    /// 文档对
    pub documents: QtiDocuments,
}

impl QtiPackage {
    pub fn new(title: &str, documents: QtiDocuments) -> Self {
        Self {
            base_name: package_base_name(title),
            documents,
        }
    }
}

/// 从标题派生包基础名
///
/// 字母数字以外的字符全部替换为下划线，整体转小写，再追加固定后缀。
pub fn package_base_name(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}{}", sanitized.to_lowercase(), PACKAGE_SUFFIX)
}
