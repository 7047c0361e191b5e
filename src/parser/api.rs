//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于读取转储文件并一次性完成切分与解析。

use crate::error::ParseError;
use crate::parser::extractor::TupleExtractor;
use crate::parser::fields::{parse_tuple_content, parse_tuples_par};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 读取整个转储文件
///
/// # 参数
///
/// * `path` - 转储文件路径
///
/// # 返回
///
/// * `Ok(String)` - 文件内容
/// * `Err(ParseError::FileNotFound)` - 文件不存在或无法读取
pub fn read_dump<P>(path: P) -> Result<String, ParseError>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let text = fs::read_to_string(path_ref).map_err(|e| ParseError::FileNotFound {
        path: format!("{}: {}", path_ref.display(), e),
    })?;
    debug!(path = %path_ref.display(), bytes = text.len(), "loaded dump");
    Ok(text)
}

/// 切分并解析转储文本中目标表的所有元组
///
/// # 示例
///
/// ```
/// use sqldump_tuple_parser::parse_dump;
///
/// let sql = "INSERT INTO `t` VALUES (1,'it''s'),(2,'b');";
/// let rows = parse_dump(sql, "t");
///
/// assert_eq!(rows, vec![vec!["1", "it's"], vec!["2", "b"]]);
/// ```
pub fn parse_dump(text: &str, table: &str) -> Vec<Vec<String>> {
    TupleExtractor::for_table(table)
        .extract(text)
        .tuples
        .iter()
        .map(|t| parse_tuple_content(t.text))
        .collect()
}

/// 并行版本的 [`parse_dump`]，结果顺序不变
pub fn parse_dump_par(text: &str, table: &str) -> Vec<Vec<String>> {
    let extraction = TupleExtractor::for_table(table).extract(text);
    parse_tuples_par(&extraction.tuples)
}

/// 流式处理：对每个元组的字段调用回调
///
/// # 返回
///
/// 处理的元组数量
pub fn for_each_tuple<F>(text: &str, table: &str, mut f: F) -> usize
where
    F: FnMut(Vec<String>),
{
    let extraction = TupleExtractor::for_table(table).extract(text);
    let count = extraction.tuples.len();
    for tuple in extraction.tuples {
        f(parse_tuple_content(tuple.text));
    }
    count
}

/// 从文件读取转储并解析所有元组（并行）
///
/// ```no_run
/// use sqldump_tuple_parser::parse_dump_from_file;
///
/// let rows = parse_dump_from_file("articulos.sql", "wp_posts")?;
/// println!("共 {} 行", rows.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_dump_from_file<P>(path: P, table: &str) -> Result<Vec<Vec<String>>, ParseError>
where
    P: AsRef<Path>,
{
    let text = read_dump(path)?;
    Ok(parse_dump_par(&text, table))
}
