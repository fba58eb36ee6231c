use crate::types::CssVarUsage;
use once_cell::sync::Lazy;
use regex::Regex;

/// 单行内的 `/* ... */`（贪婪匹配到同一行最后一个 `*/`）
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*.*\*/").unwrap());

/// 用回退值替换每个 `var(...)`
///
/// 没有回退值的 `var(...)` 原样保留，因为它没有可知的静态值。
///
/// # 示例
///
/// ```
/// use cotton_var_parse::{parse_css_vars, replace_var_fallbacks};
///
/// let value = "1px solid var(--line-line_light, #eee)";
/// let usages = parse_css_vars(value);
/// assert_eq!(replace_var_fallbacks(value, &usages), "1px solid #eee");
/// ```
pub fn replace_var_fallbacks(value: &str, usages: &[CssVarUsage]) -> String {
    if usages.is_empty() {
        return value.to_string();
    }

    let mut result = String::with_capacity(value.len());
    let mut last_index = 0;

    for usage in usages {
        result.push_str(&value[last_index..usage.start]);

        match usage.fallback_text() {
            Some(fallback) => result.push_str(fallback),
            None => result.push_str(usage.source(value)),
        }

        last_index = usage.end;
    }

    result.push_str(&value[last_index..]);
    result
}

/// 去除值中的 `/* ... */` 注释（不做 trim）
pub fn strip_comments(value: &str) -> String {
    COMMENT_RE.replace_all(value, "").into_owned()
}
