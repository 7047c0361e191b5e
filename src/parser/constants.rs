//! 解析器使用的常量定义
//!
//! 定义了切分与解析过程中使用的结构字符以及预构建的查找器。

use memchr::memmem::Finder;
use once_cell::sync::Lazy;

/// 语句头部与元组数据之间的关键字
pub const VALUES_KEYWORD: &[u8] = b"VALUES";

/// 语句结束符
pub const TERMINATOR: u8 = b';';

/// 元组左括号
pub const OPEN_PAREN: u8 = b'(';

/// 元组右括号
pub const CLOSE_PAREN: u8 = b')';

/// SQL 字符串引号
pub const QUOTE: u8 = b'\'';

/// 转义前缀
pub const BACKSLASH: u8 = b'\\';

/// 字段分隔符
pub const COMMA: u8 = b',';

/// 元组之间允许出现的分隔字节
pub const TUPLE_SEPARATORS: [u8; 5] = [b'\n', b'\r', b' ', b'\t', b','];

// 使用 Lazy 静态初始化 VALUES 查找器，避免每条语句重复构建

/// `VALUES` 关键字查找器
pub static VALUES_FINDER: Lazy<Finder<'static>> = Lazy::new(|| Finder::new(VALUES_KEYWORD));

/// 判断字节是否为元组之间的分隔符
#[inline]
pub fn is_tuple_separator(b: u8) -> bool {
    TUPLE_SEPARATORS.contains(&b)
}
