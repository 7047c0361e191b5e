//! Parser 配置模块
//!
//! 目标表名、引号检查策略以及文章记录的列位置都集中在这里，
//! 转储的表结构变化时只需更新配置，而不需要修改核心解析逻辑。

/// 元组切分配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// 目标表名（不含反引号），只处理 ``INSERT INTO `table` `` 语句
    pub table: String,

    /// 严格模式：丢弃在引号未闭合时跨越括号边界的元组（诊断信息仍会保留）
    pub strict_quotes: bool,
}

impl ExtractorConfig {
    /// WordPress 文章表的默认配置
    pub fn wp_posts() -> Self {
        Self::for_table("wp_posts")
    }

    /// 指定表名的宽松配置
    pub fn for_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            strict_quotes: false,
        }
    }

    /// 开启或关闭严格引号检查
    pub fn with_strict_quotes(mut self, strict: bool) -> Self {
        self.strict_quotes = strict;
        self
    }

    /// 语句头部的字面量前缀，如 ``INSERT INTO `wp_posts` ``
    pub fn header(&self) -> String {
        format!("INSERT INTO `{}`", self.table)
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::wp_posts()
    }
}

/// 文章记录的列位置定义
///
/// 核心只产出按源顺序排列的字段，这里记录每个语义字段在元组中的下标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostColumns {
    /// 文章 ID
    pub id: usize,
    /// 发布时间
    pub date: usize,
    /// 正文
    pub content: usize,
    /// 标题
    pub title: usize,
    /// 状态（publish、draft 等）
    pub status: usize,
    /// 别名（slug）
    pub name: usize,
    /// 全局 URL
    pub guid: usize,
    /// 记录类型（post、page、attachment 等）
    pub post_type: usize,
}

impl PostColumns {
    /// WordPress `wp_posts` 表的标准列顺序
    pub fn wordpress() -> Self {
        Self {
            id: 0,
            date: 2,
            content: 4,
            title: 5,
            status: 7,
            name: 11,
            guid: 18,
            post_type: 20,
        }
    }

    /// 组装一条记录至少需要的字段数量
    pub fn min_fields(&self) -> usize {
        [
            self.id,
            self.date,
            self.content,
            self.title,
            self.status,
            self.name,
            self.guid,
            self.post_type,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

impl Default for PostColumns {
    fn default() -> Self {
        Self::wordpress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.table, "wp_posts");
        assert!(!config.strict_quotes);
        assert_eq!(config.header(), "INSERT INTO `wp_posts`");
    }

    #[test]
    fn test_strict_builder() {
        let config = ExtractorConfig::for_table("t").with_strict_quotes(true);
        assert_eq!(config.table, "t");
        assert!(config.strict_quotes);
    }

    #[test]
    fn test_wordpress_columns() {
        let cols = PostColumns::default();
        assert_eq!(cols.post_type, 20);
        assert_eq!(cols.min_fields(), 21);
    }
}
