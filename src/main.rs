use anyhow::Result;
use clap::Parser;
use quiz_qti_convert::utils::logging;
use quiz_qti_convert::{
    parse_quiz_text, render_preview, serialize, AppError, AppResult, Chapter, Config, QtiPackage,
    ASSESSMENT_FILE_NAME, DEFAULT_CHAPTER_TITLE, MANIFEST_FILE_NAME, SAMPLE_QUIZ,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(version, about = "把纯文本测验转换为 QTI 包")]
struct Args {
    /// 测验文本输入文件
    input: PathBuf,

    /// 测验标题（指定后合并打包为单个包）
    #[arg(short, long)]
    title: Option<String>,

    /// 输出目录（默认取 QTI_OUTPUT_DIR 或 qti_output）
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// 只输出预览 HTML 到标准输出
    #[arg(long)]
    preview: bool,

    /// 以 JSON 输出解析出的模型
    #[arg(long)]
    json: bool,

    /// 输入文件不存在时先用示例测验预填
    #[arg(long)]
    init: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置并初始化日志
    let config = Config::from_env();
    logging::init(config.verbose_logging);

    run(args, config)
}

fn run(args: Args, config: Config) -> Result<()> {
    // 首次运行预填示例；输入文件已存在即视为运行过，不再覆盖
    if args.init {
        seed_sample_input(&args.input)?;
    }

    logging::log_startup(&args.input.display().to_string());

    let text = fs::read_to_string(&args.input).map_err(|source| AppError::InputRead {
        path: args.input.clone(),
        source,
    })?;

    let chapters = parse_quiz_text(&text);
    if chapters.is_empty() {
        // 唯一可观察的失败：空结果。原因不做进一步区分
        return Err(AppError::NoQuestions.into());
    }

    let question_count = chapters.iter().map(|c| c.questions.len()).sum();
    logging::log_parse_summary(chapters.len(), question_count);
    for chapter in &chapters {
        for question in &chapter.questions {
            debug!(
                "章节 {} 题目 {} [{}]: {}",
                chapter.number,
                question.number,
                question.kind,
                logging::truncate_text(&question.text, 80)
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
        return Ok(());
    }

    if args.preview {
        println!("{}", render_preview(&chapters));
        return Ok(());
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.output_dir));

    let mut package_count = 0;
    if config.split_chapters && args.title.is_none() {
        // 默认流程：每个章节单独打一个包
        for chapter in &chapters {
            let title = package_title(chapter);
            let documents = serialize(std::slice::from_ref(chapter), &title);
            write_package(&output_dir, &title, &QtiPackage::new(&title, documents))?;
            package_count += 1;
        }
    } else {
        let title = args.title.unwrap_or(config.quiz_title);
        let documents = serialize(&chapters, &title);
        write_package(&output_dir, &title, &QtiPackage::new(&title, documents))?;
        package_count += 1;
    }

    logging::print_final_stats(package_count, &output_dir.display().to_string());
    Ok(())
}

/// 单章节包的标题
///
/// 隐式默认章节打包为 "Quiz"，显式章节带上章节号和标题。
fn package_title(chapter: &Chapter) -> String {
    if chapter.title == DEFAULT_CHAPTER_TITLE {
        "Quiz".to_string()
    } else {
        format!("Chapter {} {}", chapter.number, chapter.title)
    }
}

/// 把文档对写进输出目录下的包目录
///
/// ZIP 等容器格式交给外部工具，这里只负责文件落盘。
fn write_package(output_dir: &Path, title: &str, package: &QtiPackage) -> AppResult<()> {
    let package_dir = output_dir.join(&package.base_name);
    fs::create_dir_all(&package_dir).map_err(|source| AppError::OutputWrite {
        path: package_dir.clone(),
        source,
    })?;

    let assessment_path = package_dir.join(ASSESSMENT_FILE_NAME);
    fs::write(&assessment_path, &package.documents.assessment).map_err(|source| {
        AppError::OutputWrite {
            path: assessment_path.clone(),
            source,
        }
    })?;

    let manifest_path = package_dir.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, &package.documents.manifest).map_err(|source| {
        AppError::OutputWrite {
            path: manifest_path.clone(),
            source,
        }
    })?;

    logging::log_package_written(title, &package_dir.display().to_string());
    Ok(())
}

/// 用示例测验预填输入文件
fn seed_sample_input(path: &Path) -> AppResult<()> {
    if path.exists() {
        info!("输入文件已存在，跳过示例预填: {}", path.display());
        return Ok(());
    }

    fs::write(path, SAMPLE_QUIZ).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("✓ 已用示例测验预填输入文件: {}", path.display());
    Ok(())
}
