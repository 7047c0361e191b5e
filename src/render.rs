//! 输出渲染 - 把文章写成 Markdown 或 HTML 文件

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::error::ParseError;
use crate::post::Post;
use crate::tools::{escape_html, escape_yaml_quotes, sanitize_stem, slugify};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const FILE_DATE_FORMAT: &str = "%Y%m%d";

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutputFormat {
    /// YAML front matter + 原始正文
    #[default]
    Markdown,
    /// 独立的 HTML 页面
    Html,
}

impl OutputFormat {
    /// 文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            other => Err(ParseError::InvalidFormat {
                reason: format!("unknown output format '{}', expected 'md' or 'html'", other),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 生成文件名：`YYYYMMDD-<id>-<stem>.<ext>`
///
/// 主干优先取别名，没有别名时由标题生成；清洗后为空则使用 `post-<id>`。
pub fn file_name(post: &Post, format: OutputFormat) -> String {
    let base = if post.name.is_empty() {
        slugify(&post.title)
    } else {
        post.name.clone()
    };

    let mut stem = sanitize_stem(&base);
    if stem.is_empty() {
        stem = format!("post-{}", post.id);
    }

    format!(
        "{}-{}-{}.{}",
        post.display_date().format(FILE_DATE_FORMAT),
        post.id,
        stem,
        format.extension()
    )
}

/// 渲染 Markdown：front matter 后原样保留正文
pub fn render_markdown(post: &Post) -> String {
    let date = post.display_date().format(DISPLAY_FORMAT);
    [
        "---".to_string(),
        format!("title: \"{}\"", escape_yaml_quotes(&post.title)),
        format!("date: {}", date),
        "---".to_string(),
        String::new(),
        post.content.clone(),
    ]
    .join("\n")
}

/// 渲染独立 HTML 页面，正文原样嵌入
pub fn render_html(post: &Post) -> String {
    let date = post.display_date();
    let title = escape_html(&post.title);
    format!(
        r#"<!doctype html>
<html lang="es">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<article>
<h1>{title}</h1>
<p><time datetime="{iso}">{display}</time></p>
{content}
</article>
</body>
</html>
"#,
        title = title,
        iso = date.format(ISO_FORMAT),
        display = date.format(DISPLAY_FORMAT),
        content = post.content,
    )
}

/// 按格式渲染
pub fn render_post(post: &Post, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown(post),
        OutputFormat::Html => render_html(post),
    }
}

/// 把文章写入输出目录（不存在时创建）
///
/// # 返回
///
/// 按写入顺序排列的文件路径
pub fn write_posts<P>(posts: &[Post], out_dir: P, format: OutputFormat) -> Result<Vec<PathBuf>, ParseError>
where
    P: AsRef<Path>,
{
    let dir = out_dir.as_ref();
    fs::create_dir_all(dir).map_err(|e| {
        ParseError::IoError(format!("failed to create {}: {}", dir.display(), e))
    })?;

    let mut created = Vec::with_capacity(posts.len());
    for post in posts {
        let path = dir.join(file_name(post, format));
        fs::write(&path, render_post(post, format)).map_err(|e| {
            ParseError::IoError(format!("failed to write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), "wrote post");
        created.push(path);
    }
    Ok(created)
}
