//! Parser 模块 - 从 SQL 转储中切分元组并解析字段
//!
//! 此模块提供了完整的解析功能,包括:
//! - 语句定位与元组切分（纯函数，不涉及 I/O）
//! - 引号/转义感知的字段解析状态机
//! - 从文件读取转储的便捷 API 函数

pub mod api;
mod constants;
pub mod extractor;
pub mod fields;

pub use api::{for_each_tuple, parse_dump, parse_dump_from_file, parse_dump_par, read_dump};
pub use extractor::{
    Diagnostic, Extraction, RawTuple, StatementMatch, Statements, TupleExtractor, extract_tuples,
};
pub use fields::{
    Action, CharClass, Fields, QuoteState, clean_sql_field, fields, parse_tuple_content,
    parse_tuples_par,
};
