//! 错误类型定义
//!
//! 核心的元组切分与字段解析从不失败；这里的错误只来自核心之外的部分：
//! 读取转储文件、按列位置组装文章、写出输出文件。

use thiserror::Error;

/// 解析错误类型
///
/// 包含了读取转储、组装记录和写出文件时可能遇到的所有错误情况。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径（附带底层错误信息）
        path: String,
    },

    /// 读写失败
    #[error("io error: {0}")]
    IoError(String),

    /// 元组字段数量不足，无法按列位置取值
    #[error("missing column {index}: tuple has only {len} fields")]
    MissingColumn {
        /// 期望的列下标
        index: usize,
        /// 实际字段数量
        len: usize,
    },

    /// 通用的格式错误
    #[error("invalid format: {reason}")]
    InvalidFormat {
        /// 失败原因
        reason: String,
    },
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::IoError(e.to_string())
    }
}
