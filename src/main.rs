//! extract-posts：从 WordPress SQL 转储中提取文章并生成 Markdown/HTML 文件

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sqldump_tuple_parser::{
    ExtractorConfig, OutputFormat, PostColumns, collect_posts, read_dump, select_latest,
    write_posts,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 从 SQL 转储中提取文章并生成文件
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// 输出格式（md 或 html）
    #[arg(long, default_value = "md")]
    format: OutputFormat,

    /// 生成全部文章，而不是只生成最近的几篇
    #[arg(long)]
    all: bool,

    /// 未使用 --all 时最多生成的文章数量
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// 目标表名
    #[arg(long, default_value = "wp_posts")]
    table: String,

    /// 输出目录
    #[arg(long, default_value = "articles/posts")]
    out_dir: PathBuf,

    /// 丢弃引号未闭合时跨越括号边界的元组
    #[arg(long)]
    strict_quotes: bool,

    /// 日志详细程度（-v debug，-vv trace）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// SQL 转储文件
    dump: PathBuf,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = read_dump(&args.dump)
        .with_context(|| format!("reading dump {}", args.dump.display()))?;

    let config = ExtractorConfig::for_table(args.table.as_str()).with_strict_quotes(args.strict_quotes);
    let posts = collect_posts(&text, &config, &PostColumns::wordpress());
    info!(posts = posts.len(), "parsed dump");

    let limit = if args.all { None } else { Some(args.limit) };
    let latest = select_latest(posts, limit);

    let created = write_posts(&latest, &args.out_dir, args.format)
        .with_context(|| format!("writing posts to {}", args.out_dir.display()))?;

    println!("Created {} files:", created.len());
    for path in &created {
        println!("- {}", path.display());
    }
    Ok(())
}
