use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
///
/// 解析和序列化本身是全函数，不会失败；
/// 错误只出现在输入输出边界和"没有解析出题目"这一种可观察的失败上。
#[derive(Debug, Error)]
pub enum AppError {
    /// 读取输入文件失败
    #[error("读取输入文件失败 ({path}): {source}")]
    InputRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 写入输出文件失败
    #[error("写入输出失败 ({path}): {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// 输入中没有解析出任何题目
    #[error("没有解析出任何题目，请检查输入格式")]
    NoQuestions,
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
