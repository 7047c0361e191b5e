//! 元组切分 - 从转储文本中定位 INSERT 语句并切出每个行元组
//!
//! 扫描是纯语法层面的：括号与 `;` 无论是否位于引号内都被当作结构字符。
//! 这要求输入满足一个前提：字符串字面量中不会在结构位置出现未转义的
//! `(`、`)` 或 `;`。切分时会同时跟踪引号状态，违反前提的位置以
//! [`Diagnostic`] 的形式报告，而不会影响括号深度的计算。

use memchr::memchr;
use memchr::memmem::Finder;
use tracing::{debug, trace};

use crate::parser::constants::{
    CLOSE_PAREN, OPEN_PAREN, TERMINATOR, VALUES_FINDER, VALUES_KEYWORD, is_tuple_separator,
};
use crate::parser::fields::{CharClass, QuoteState};
use crate::parser_config::ExtractorConfig;

/// 一次语句头部匹配
///
/// 所有偏移量都是相对于整个转储文本的字节偏移。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatementMatch {
    /// `INSERT INTO` 的起始位置
    pub header_start: usize,
    /// 元组数据的起始位置（紧跟在 `VALUES` 之后）
    pub data_start: usize,
    /// 之后第一个 `;` 的位置
    pub terminator: Option<usize>,
}

/// 一个原始元组：一对配平括号之间的文本（不含括号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTuple<'a> {
    /// 元组内部文本，原样保留
    pub text: &'a str,
    /// `text` 第一个字节在转储文本中的偏移
    pub offset: usize,
}

impl AsRef<str> for RawTuple<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

/// 切分过程中发现的非致命问题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Diagnostic {
    /// 语句头部之后找不到 `;`，整段被忽略
    MissingTerminator {
        /// 语句头部的位置
        header_offset: usize,
    },
    /// 元组之间出现了既不是分隔符也不是 `(` 的字节，该段扫描停止
    UnexpectedByte {
        /// 字节位置
        offset: usize,
        /// 实际字节
        byte: u8,
    },
    /// 括号直到段尾都没有配平，该元组被丢弃
    UnbalancedTuple {
        /// 元组左括号的位置
        offset: usize,
    },
    /// 引号未闭合时计入了一个括号
    QuotedDelimiter {
        /// 括号位置
        offset: usize,
        /// `(` 或 `)`
        delimiter: u8,
    },
    /// 元组在引号未闭合时结束
    OpenQuoteAtBoundary {
        /// 结束元组的右括号位置
        offset: usize,
    },
    /// 到达语句结束符时引号仍未闭合
    OpenQuoteAtTerminator {
        /// `;` 的位置
        offset: usize,
    },
}

/// 一次完整切分的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// 按源顺序排列的元组
    pub tuples: Vec<RawTuple<'a>>,
    /// 发现的诊断信息
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> Extraction<'a> {
    /// 只取元组文本
    pub fn texts(&self) -> Vec<&'a str> {
        self.tuples.iter().map(|t| t.text).collect()
    }

    /// 是否没有任何诊断
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// 元组切分器
///
/// # 示例
///
/// ```
/// use sqldump_tuple_parser::TupleExtractor;
///
/// let sql = "INSERT INTO `t` VALUES (1,'x'),(2,'y');";
/// let extraction = TupleExtractor::for_table("t").extract(sql);
///
/// assert_eq!(extraction.texts(), vec!["1,'x'", "2,'y'"]);
/// assert!(extraction.is_clean());
/// ```
#[derive(Debug, Clone)]
pub struct TupleExtractor {
    config: ExtractorConfig,
    header: Finder<'static>,
}

impl TupleExtractor {
    /// 根据配置创建切分器
    pub fn new(config: ExtractorConfig) -> Self {
        let header = Finder::new(config.header().as_bytes()).into_owned();
        Self { config, header }
    }

    /// 以宽松配置针对某张表创建切分器
    pub fn for_table(table: &str) -> Self {
        Self::new(ExtractorConfig::for_table(table))
    }

    /// 当前配置
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// 按源顺序迭代所有语句头部匹配
    pub fn statements<'e, 't>(&'e self, text: &'t str) -> Statements<'e, 't> {
        Statements {
            header: &self.header,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// 切分整个转储文本
    pub fn extract<'a>(&self, text: &'a str) -> Extraction<'a> {
        let mut out = Extraction::default();

        for stmt in self.statements(text) {
            let Some(end) = stmt.terminator else {
                debug!(header_offset = stmt.header_start, "statement has no terminator");
                out.diagnostics.push(Diagnostic::MissingTerminator {
                    header_offset: stmt.header_start,
                });
                continue;
            };

            let before = out.tuples.len();
            self.scan_region(text, stmt.data_start, end, &mut out);
            trace!(
                header_offset = stmt.header_start,
                tuples = out.tuples.len() - before,
                "scanned statement"
            );
        }

        out
    }

    /// 扫描 `[start, end)` 区间内的元组序列
    fn scan_region<'a>(&self, text: &'a str, start: usize, end: usize, out: &mut Extraction<'a>) {
        let bytes = text.as_bytes();
        let mut i = start;

        loop {
            while i < end && is_tuple_separator(bytes[i]) {
                i += 1;
            }
            if i >= end {
                break;
            }
            if bytes[i] != OPEN_PAREN {
                debug!(offset = i, byte = bytes[i], "unexpected byte between tuples");
                out.diagnostics.push(Diagnostic::UnexpectedByte {
                    offset: i,
                    byte: bytes[i],
                });
                break;
            }

            match scan_tuple(bytes, i, end, &mut out.diagnostics) {
                TupleScan::Closed { close, suspicious } => {
                    if suspicious && self.config.strict_quotes {
                        debug!(offset = i, "dropping tuple with open quote at a boundary");
                    } else {
                        out.tuples.push(RawTuple {
                            text: &text[i + 1..close],
                            offset: i + 1,
                        });
                    }
                    i = close + 1;
                }
                TupleScan::Unbalanced { quote_open } => {
                    debug!(offset = i, "tuple parentheses never balance");
                    out.diagnostics.push(Diagnostic::UnbalancedTuple { offset: i });
                    if quote_open {
                        out.diagnostics
                            .push(Diagnostic::OpenQuoteAtTerminator { offset: end });
                    }
                    break;
                }
            }
        }
    }
}

/// 语句头部匹配迭代器
///
/// 每次匹配 ``INSERT INTO `table` ``，再向后找最近的 `VALUES`；
/// 下一次搜索从 `VALUES` 之后继续，匹配之间互不重叠。
#[derive(Debug)]
pub struct Statements<'e, 't> {
    header: &'e Finder<'static>,
    bytes: &'t [u8],
    pos: usize,
}

impl Iterator for Statements<'_, '_> {
    type Item = StatementMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.bytes.get(self.pos..)?;
        let header_start = self.pos + self.header.find(rest)?;
        let after_header = header_start + self.header.needle().len();

        // 之后再没有 VALUES 时，后续的头部也不可能匹配
        let Some(values) = VALUES_FINDER.find(&self.bytes[after_header..]) else {
            self.pos = self.bytes.len();
            return None;
        };

        let data_start = after_header + values + VALUES_KEYWORD.len();
        let terminator = memchr(TERMINATOR, &self.bytes[data_start..]).map(|p| data_start + p);
        self.pos = data_start;

        Some(StatementMatch {
            header_start,
            data_start,
            terminator,
        })
    }
}

enum TupleScan {
    Closed { close: usize, suspicious: bool },
    Unbalanced { quote_open: bool },
}

/// 从 `open` 处的左括号开始做深度扫描
fn scan_tuple(bytes: &[u8], open: usize, end: usize, diags: &mut Vec<Diagnostic>) -> TupleScan {
    let mut depth = 0usize;
    let mut quote = QuoteState::Unquoted;
    let mut suspicious = false;

    for (j, &b) in bytes.iter().enumerate().take(end).skip(open) {
        // 元组自身的左括号不参与引号跟踪
        if j > open {
            quote = quote.step(CharClass::of_byte(b)).1;
        }

        if b != OPEN_PAREN && b != CLOSE_PAREN {
            continue;
        }
        if quote.in_literal() {
            debug!(offset = j, "parenthesis inside an open quote");
            diags.push(Diagnostic::QuotedDelimiter {
                offset: j,
                delimiter: b,
            });
            suspicious = true;
        }

        if b == OPEN_PAREN {
            depth += 1;
        } else {
            depth -= 1;
            if depth == 0 {
                if quote.in_literal() {
                    diags.push(Diagnostic::OpenQuoteAtBoundary { offset: j });
                }
                return TupleScan::Closed { close: j, suspicious };
            }
        }
    }

    TupleScan::Unbalanced {
        quote_open: quote.in_literal(),
    }
}

/// 从转储文本中切出目标表所有 INSERT 语句的元组
///
/// 结果按源顺序排列，不含外层括号，内部文本原样保留。格式错误的段
/// 只会产出更少的元组，不会报错。
///
/// # 示例
///
/// ```
/// use sqldump_tuple_parser::extract_tuples;
///
/// let sql = "INSERT INTO `wp_posts` (`ID`, `post_title`) VALUES (1,'x'),(2,'y');";
/// let tuples: Vec<&str> = extract_tuples(sql, "wp_posts").iter().map(|t| t.text).collect();
///
/// assert_eq!(tuples, vec!["1,'x'", "2,'y'"]);
/// ```
pub fn extract_tuples<'a>(text: &'a str, table: &str) -> Vec<RawTuple<'a>> {
    TupleExtractor::for_table(table).extract(text).tuples
}
