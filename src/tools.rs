//! 输出辅助函数：别名生成、文件名清洗、HTML 转义。

const FALLBACK_SLUG: &str = "post";

/// 由标题生成 URL 别名
///
/// 转为小写后，把每段非 `[a-z0-9-]` 字符替换为一个 `-`，合并连续的 `-`
/// 并去掉首尾的 `-`。结果为空时返回 `"post"`。
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-';
        let c = if keep { c } else { '-' };
        if c == '-' && out.ends_with('-') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 只保留 `[A-Za-z0-9_-]`，用作文件名主干
pub fn sanitize_stem(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// 转义 HTML 特殊字符（包括引号）
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// 转义 YAML 双引号字符串中的 `"`
#[inline]
pub fn escape_yaml_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}
