//! 文章记录
//!
//! 把按位置排列的字段映射为一条文章记录，并按类型筛选、按日期排序。
//! 列的位置由 [`PostColumns`] 给出，核心解析器本身并不知道表结构。

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::error::ParseError;
use crate::parser::{TupleExtractor, clean_sql_field, parse_tuples_par};
use crate::parser_config::{ExtractorConfig, PostColumns};

/// 只保留这种 `post_type` 的记录
pub const POST_TYPE: &str = "post";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// 一篇文章
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Post {
    /// 文章 ID，保持原样
    pub id: String,

    /// 发布时间；无法解析时为 `None`，排序时排在最后
    pub date: Option<NaiveDateTime>,

    /// 正文（转储中通常是 HTML）
    pub content: String,

    /// 标题
    pub title: String,

    /// 状态
    pub status: String,

    /// 别名
    pub name: String,

    /// 全局 URL
    pub guid: String,

    /// 记录类型
    pub post_type: String,
}

impl Post {
    /// 从一个元组的字段组装文章
    ///
    /// # 错误
    ///
    /// 字段数量不足以覆盖所有列时返回 `MissingColumn`。
    pub fn from_fields(fields: &[String], cols: &PostColumns) -> Result<Self, ParseError> {
        let min = cols.min_fields();
        if fields.len() < min {
            return Err(ParseError::MissingColumn {
                index: min - 1,
                len: fields.len(),
            });
        }

        let col = |i: usize| clean_sql_field(&fields[i]).to_string();
        let date = parse_post_date(clean_sql_field(&fields[cols.date]));

        Ok(Self {
            id: fields[cols.id].clone(),
            date,
            content: col(cols.content),
            title: col(cols.title),
            status: col(cols.status),
            name: col(cols.name),
            guid: col(cols.guid),
            post_type: col(cols.post_type),
        })
    }

    /// 是否为普通文章
    pub fn is_post(&self) -> bool {
        self.post_type == POST_TYPE
    }

    /// 用于展示和文件名的日期；未知日期显示为 `0001-01-01 00:00:00`
    pub fn display_date(&self) -> NaiveDateTime {
        self.date.unwrap_or_else(undated)
    }
}

fn undated() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// 解析 `YYYY-MM-DD HH:MM:SS`，失败时退回 `YYYY-MM-DD`
pub fn parse_post_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// 从转储文本中收集所有文章，保持源顺序
///
/// 字段不足的元组和非 `post` 类型的记录会被跳过。
pub fn collect_posts(text: &str, config: &ExtractorConfig, cols: &PostColumns) -> Vec<Post> {
    let extraction = TupleExtractor::new(config.clone()).extract(text);
    if !extraction.is_clean() {
        debug!(
            diagnostics = extraction.diagnostics.len(),
            "extraction reported diagnostics"
        );
    }

    let rows = parse_tuples_par(&extraction.tuples);
    let mut posts = Vec::new();
    let mut short = 0usize;

    for (tuple, fields) in extraction.tuples.iter().zip(rows) {
        match Post::from_fields(&fields, cols) {
            Ok(post) if post.is_post() => posts.push(post),
            Ok(_) => {}
            Err(e) => {
                short += 1;
                debug!(offset = tuple.offset, error = %e, "skipping record");
            }
        }
    }

    debug!(
        tuples = extraction.tuples.len(),
        posts = posts.len(),
        skipped = short,
        "collected posts"
    );
    posts
}

/// 按日期从新到旧排序，`limit` 为 `None` 时保留全部
pub fn select_latest(mut posts: Vec<Post>, limit: Option<usize>) -> Vec<Post> {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    if let Some(n) = limit {
        posts.truncate(n);
    }
    posts
}
