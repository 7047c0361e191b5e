//! # SQL Dump Tuple Parser
//!
//! 一个轻量的 SQL 转储解析器：从 `INSERT INTO` 语句中切出行元组，并把每个元组
//! 解析为解码后的字段，无需完整的 SQL 语法。
//!
//! ## 功能特性
//!
//! - **两阶段纯函数流水线**: 元组切分与字段解析都只接收文本、返回结构化数据
//! - **显式状态机**: 字段解析由引号状态转移表驱动，支持 `''` 与反斜杠转义
//! - **诊断而非报错**: 格式错误的段只会产出更少的元组，并附带诊断信息
//! - **并行解析**: 基于 rayon 并行解析大量元组，保持源顺序
//!
//! ## 快速开始
//!
//! ```rust
//! use sqldump_tuple_parser::{extract_tuples, parse_tuple_content};
//!
//! let sql = "INSERT INTO `wp_posts` VALUES (1,'Hello, world','it''s'),(2,'x','y');";
//!
//! for tuple in extract_tuples(sql, "wp_posts") {
//!     let fields = parse_tuple_content(tuple.text);
//!     println!("{:?}", fields);
//! }
//! ```
//!
//! ### 带诊断的切分
//!
//! ```rust
//! use sqldump_tuple_parser::{Diagnostic, TupleExtractor};
//!
//! let sql = "INSERT INTO `t` VALUES (1,'x'),(2,'y';";
//! let extraction = TupleExtractor::for_table("t").extract(sql);
//!
//! assert_eq!(extraction.texts(), vec!["1,'x'"]);
//! assert!(matches!(extraction.diagnostics[0], Diagnostic::UnbalancedTuple { .. }));
//! ```
//!
//! ## 输入前提
//!
//! 括号和 `;` 被视为结构字符，不区分是否位于引号内。字符串字面量若在结构位置
//! 含有未转义的 `(`、`)` 或 `;`，切分结果可能不正确；这种情况会通过
//! [`Diagnostic`] 报告。

pub mod error;
pub mod parser;
pub mod parser_config;
pub mod post;
pub mod render;
pub mod tools;

pub use error::ParseError;
pub use parser::{
    Diagnostic, Extraction, Fields, RawTuple, StatementMatch, TupleExtractor, clean_sql_field,
    extract_tuples, fields, for_each_tuple, parse_dump, parse_dump_from_file, parse_dump_par,
    parse_tuple_content, parse_tuples_par, read_dump,
};
pub use parser_config::{ExtractorConfig, PostColumns};
pub use post::{Post, collect_posts, select_latest};
pub use render::{OutputFormat, write_posts};
