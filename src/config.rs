/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 生成的包输出目录
    pub output_dir: String,
    /// 合并打包时使用的测验标题
    pub quiz_title: String,
    /// 是否按章节拆分为多个包
    pub split_chapters: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "qti_output".to_string(),
            quiz_title: "Imported Quiz".to_string(),
            split_chapters: true,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            output_dir: std::env::var("QTI_OUTPUT_DIR").unwrap_or(default.output_dir),
            quiz_title: std::env::var("QTI_QUIZ_TITLE").unwrap_or(default.quiz_title),
            split_chapters: std::env::var("SPLIT_CHAPTERS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.split_chapters),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
