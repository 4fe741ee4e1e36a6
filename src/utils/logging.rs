/// 日志工具模块
///
/// 提供日志初始化和输出格式的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// # 参数
/// - `verbose`: 是否默认输出 debug 级别日志（RUST_LOG 优先）
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "quiz_qti_convert=debug"
    } else {
        "quiz_qti_convert=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `input`: 输入文件路径
pub fn log_startup(input: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 测验转换启动");
    info!("📄 输入文件: {}", input);
    info!("{}", "=".repeat(60));
}

/// 记录解析结果概览
///
/// # 参数
/// - `chapter_count`: 章节数
/// - `question_count`: 题目总数
pub fn log_parse_summary(chapter_count: usize, question_count: usize) {
    info!(
        "✓ 解析完成: {} 个章节, 共 {} 道题目",
        chapter_count, question_count
    );
}

/// 记录单个包生成完成
///
/// # 参数
/// - `title`: 包标题
/// - `path`: 包输出路径
pub fn log_package_written(title: &str, path: &str) {
    info!("📦 已生成包 \"{}\" → {}", title, path);
}

/// 打印最终统计信息
///
/// # 参数
/// - `package_count`: 生成的包数量
/// - `output_dir`: 输出目录
pub fn print_final_stats(package_count: usize, output_dir: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "✅ 全部完成: 共生成 {} 个 QTI 包",
        package_count
    );
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("输出目录: {}", output_dir);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
