//! 字段解析 - 将一个元组的内部文本切分为解码后的字段
//!
//! 解析过程是一个显式的有限状态机：状态 [`QuoteState`] 与字符类别 [`CharClass`]
//! 决定动作 [`Action`] 和下一个状态。[`Fields`] 把这个状态机折叠为惰性的字段序列。

use crate::parser::constants::{BACKSLASH, COMMA, QUOTE};
use rayon::prelude::*;
use std::str::Chars;

use super::extractor::RawTuple;

/// 引号状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteState {
    /// 引号之外
    #[default]
    Unquoted,
    /// 字符串字面量之内
    Quoted,
    /// 字面量内刚读到一个引号：后面再跟一个引号是转义，否则字面量结束
    QuoteSeen,
    /// 字面量内刚读到反斜杠，下一个字符原样输出
    Escaped,
}

/// 状态机关心的字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// `'`
    Quote,
    /// `\`
    Backslash,
    /// `,`
    Comma,
    /// 其它任意字符
    Other,
}

impl CharClass {
    /// 对字符分类
    #[inline]
    pub fn of(c: char) -> Self {
        if c.is_ascii() {
            Self::of_byte(c as u8)
        } else {
            CharClass::Other
        }
    }

    /// 对字节分类（多字节 UTF-8 序列的每个字节都归为 `Other`）
    #[inline]
    pub fn of_byte(b: u8) -> Self {
        match b {
            QUOTE => CharClass::Quote,
            BACKSLASH => CharClass::Backslash,
            COMMA => CharClass::Comma,
            _ => CharClass::Other,
        }
    }
}

/// 每一步转移执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// 丢弃当前字符
    Skip,
    /// 把当前字符追加到字段缓冲
    Push,
    /// 结束当前字段
    CloseField,
}

impl QuoteState {
    /// 转移表：(状态, 字符类别) -> (动作, 下一状态)
    #[inline]
    pub fn step(self, class: CharClass) -> (Action, QuoteState) {
        use Action::*;
        use CharClass::*;
        use QuoteState::*;

        match (self, class) {
            (Unquoted, Quote) => (Skip, Quoted),
            (Unquoted, Comma) => (CloseField, Unquoted),
            (Unquoted, Backslash | Other) => (Push, Unquoted),

            (Quoted, Quote) => (Skip, QuoteSeen),
            (Quoted, Backslash) => (Skip, Escaped),
            (Quoted, Comma | Other) => (Push, Quoted),

            // 连续两个引号：输出一个引号并留在字面量内
            (QuoteSeen, Quote) => (Push, Quoted),
            (QuoteSeen, Comma) => (CloseField, Unquoted),
            (QuoteSeen, Backslash | Other) => (Push, Unquoted),

            (Escaped, _) => (Push, Quoted),
        }
    }

    /// 是否仍处于未闭合的字符串字面量内
    #[inline]
    pub fn in_literal(self) -> bool {
        matches!(self, QuoteState::Quoted | QuoteState::Escaped)
    }
}

/// 惰性字段迭代器
///
/// 每次迭代产出一个未去除首尾空白的字段。输入结束时最后一个缓冲总会被产出，
/// 即使它为空；因此字段数量恒等于引号外逗号数量加一。
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    chars: Chars<'a>,
    state: QuoteState,
    finished: bool,
}

impl<'a> Fields<'a> {
    /// 从元组内部文本创建迭代器
    pub fn new(raw: &'a str) -> Self {
        Self {
            chars: raw.chars(),
            state: QuoteState::Unquoted,
            finished: false,
        }
    }

    /// 当前状态机状态
    pub fn state(&self) -> QuoteState {
        self.state
    }
}

impl Iterator for Fields<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut buf = String::new();
        for c in self.chars.by_ref() {
            let (action, next) = self.state.step(CharClass::of(c));
            self.state = next;
            match action {
                Action::Skip => {}
                Action::Push => buf.push(c),
                Action::CloseField => return Some(buf),
            }
        }

        // 末尾孤立的反斜杠在 Escaped 状态下被丢弃
        self.finished = true;
        Some(buf)
    }
}

/// 返回元组内部文本的惰性字段迭代器
pub fn fields(raw: &str) -> Fields<'_> {
    Fields::new(raw)
}

/// 将一个元组的内部文本解析为字段列表
///
/// 引号标记被剥离，`''` 与反斜杠转义被解码，每个字段去除首尾空白。
///
/// # 示例
///
/// ```
/// use sqldump_tuple_parser::parse_tuple_content;
///
/// let fields = parse_tuple_content("a,'b,c''d',3");
/// assert_eq!(fields, vec!["a", "b,c'd", "3"]);
/// ```
pub fn parse_tuple_content(raw: &str) -> Vec<String> {
    fields(raw)
        .map(|f| {
            let trimmed = f.trim();
            if trimmed.len() == f.len() {
                f
            } else {
                trimmed.to_string()
            }
        })
        .collect()
}

/// 去掉字段外层的一对 SQL 引号
///
/// 先去除首尾空白；若结果同时以 `'` 开头和结尾，则各去掉一个。
/// 单独的一个 `'` 会变成空字符串。
#[inline]
pub fn clean_sql_field(field: &str) -> &str {
    let f = field.trim();
    if f.starts_with('\'') && f.ends_with('\'') {
        if f.len() >= 2 { &f[1..f.len() - 1] } else { "" }
    } else {
        f
    }
}

/// 并行解析多个元组，结果顺序与输入一致
pub fn parse_tuples_par(tuples: &[RawTuple<'_>]) -> Vec<Vec<String>> {
    tuples
        .par_iter()
        .map(|t| parse_tuple_content(t.text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_comma_and_doubled_quote() {
        assert_eq!(parse_tuple_content("a,'b,c''d',3"), vec!["a", "b,c'd", "3"]);
    }

    #[test]
    fn escaped_quote() {
        assert_eq!(parse_tuple_content("'it''s'"), vec!["it's"]);
    }

    #[test]
    fn backslash_escape() {
        assert_eq!(parse_tuple_content(r"'a\'b'"), vec!["a'b"]);
        assert_eq!(parse_tuple_content(r"'line\nbreak'"), vec!["linenbreak"]);
        assert_eq!(parse_tuple_content(r"'c:\\dir'"), vec![r"c:\dir"]);
    }

    #[test]
    fn trailing_backslash_is_dropped() {
        assert_eq!(parse_tuple_content(r"'abc\"), vec!["abc"]);
    }

    #[test]
    fn backslash_outside_quotes_is_literal() {
        assert_eq!(parse_tuple_content(r"a\b,c"), vec![r"a\b", "c"]);
    }

    #[test]
    fn empty_input_yields_one_empty_field() {
        assert_eq!(parse_tuple_content(""), vec![""]);
        assert_eq!(parse_tuple_content("   "), vec![""]);
    }

    #[test]
    fn empty_fields_are_kept() {
        assert_eq!(parse_tuple_content(",,"), vec!["", "", ""]);
        assert_eq!(parse_tuple_content("1,'',2"), vec!["1", "", "2"]);
    }

    #[test]
    fn lazy_fields_are_untrimmed() {
        let v: Vec<String> = fields(" 1 , 'x' ").collect();
        assert_eq!(v, vec![" 1 ", " x "]);
    }

    #[test]
    fn adjacent_literals_concatenate() {
        assert_eq!(parse_tuple_content("'a' 'b'"), vec!["a b"]);
    }

    #[test]
    fn non_ascii_content() {
        assert_eq!(parse_tuple_content("'año','café'"), vec!["año", "café"]);
    }

    #[test]
    fn transition_table() {
        use QuoteState::*;
        assert_eq!(Unquoted.step(CharClass::Quote), (Action::Skip, Quoted));
        assert_eq!(Quoted.step(CharClass::Comma), (Action::Push, Quoted));
        assert_eq!(QuoteSeen.step(CharClass::Quote), (Action::Push, Quoted));
        assert_eq!(QuoteSeen.step(CharClass::Comma), (Action::CloseField, Unquoted));
        assert_eq!(Escaped.step(CharClass::Quote), (Action::Push, Quoted));
        assert!(Quoted.in_literal());
        assert!(!QuoteSeen.in_literal());
    }

    #[test]
    fn clean_field() {
        assert_eq!(clean_sql_field(" 'abc' "), "abc");
        assert_eq!(clean_sql_field("123"), "123");
        assert_eq!(clean_sql_field("'abc"), "'abc");
        assert_eq!(clean_sql_field("'"), "");
        assert_eq!(clean_sql_field("''"), "");
    }
}
