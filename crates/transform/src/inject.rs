use crate::pattern::followed_by_word_or_hyphen;
use cotton_core::resolve_color_token;
use cotton_var_parse::CssVarUsage;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

/// 只包着单词/连字符的方括号
static BRACKET_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([A-Za-z0-9_-]+)\]").unwrap());

/// 回退值的大小写/空白变体
///
/// 原文、去空白、以及两者的全小写/全大写形式；去重，按长度降序排列。
fn fallback_variants(fallback: &str) -> Vec<String> {
    let trimmed = fallback.trim();
    let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    let set: IndexSet<String> = [
        trimmed.to_string(),
        compact.clone(),
        trimmed.to_lowercase(),
        compact.to_lowercase(),
        trimmed.to_uppercase(),
        compact.to_uppercase(),
    ]
    .into_iter()
    .filter(|v| !v.is_empty())
    .collect();

    let mut variants: Vec<String> = set.into_iter().collect();
    // 稳定排序：同长度保持原顺序
    variants.sort_by(|a, b| b.len().cmp(&a.len()));
    variants
}

/// 匹配 `[ <variant> ]`，返回消费的字节数
fn match_bracketed(rest: &str, variants: &[String]) -> Option<usize> {
    let inner = rest.strip_prefix('[')?;
    let after_open = inner.trim_start();
    let lead = inner.len() - after_open.len();

    variants.iter().find_map(|variant| {
        let tail = after_open.strip_prefix(variant.as_str())?;
        let closing = tail.trim_start();
        closing.strip_prefix(']')?;
        let gap = tail.len() - closing.len();
        Some(1 + lead + variant.len() + gap + 1)
    })
}

/// 匹配 `-<variant>`（后面不能紧跟单词字符或连字符），返回消费的字节数
fn match_hyphenated(class: &str, pos: usize, variants: &[String]) -> Option<usize> {
    let after = class[pos..].strip_prefix('-')?;

    variants.iter().find_map(|variant| {
        after.strip_prefix(variant.as_str())?;
        let end = pos + 1 + variant.len();
        (!followed_by_word_or_hyphen(class, end)).then_some(1 + variant.len())
    })
}

/// 将类名中出现的回退值替换为 token
///
/// 单次从左到右扫描：每个位置先试方括号形式，再试连字符形式；
/// 已替换的区域不会被再次检查。
fn replace_fallback_with_token(class: &str, fallback: &str, token: &str) -> String {
    let variants = fallback_variants(fallback);
    if variants.is_empty() {
        return class.to_string();
    }

    let mut out = String::with_capacity(class.len());
    let mut pos = 0;

    while pos < class.len() {
        let rest = &class[pos..];

        if let Some(len) = match_bracketed(rest, &variants) {
            out.push_str(token);
            pos += len;
            continue;
        }

        if let Some(len) = match_hyphenated(class, pos, &variants) {
            out.push('-');
            out.push_str(token);
            pos += len;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(ch);
        pos += ch.len_utf8();
    }

    out
}

/// 将 `var(<name>)` 替换为 token
fn replace_var_expressions(class: &str, name: &str, token: &str) -> String {
    let pattern = format!(r"var\(\s*{}\s*\)", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(class, NoExpand(token)).into_owned(),
        Err(_) => class.to_string(),
    }
}

/// `[<word>]` → `<word>`
fn cleanup_bracket_tokens(class: &str) -> String {
    BRACKET_TOKEN_RE.replace_all(class, "${1}").into_owned()
}

/// 把设计 token 写回生成的原子类
///
/// 生成器只认识回退值（或 `var(...)` 原文），这里按变量名解析出颜色 token 后替换：
/// - `text-[#FFFFFF]` + `var(--background-bg2, #fff)` → `text-bg_2`
/// - `bg-[var(--text-1)]` → `bg-text_1`
///
/// 多个变量按解析顺序依次处理，先处理的变量优先占用重叠文本。
///
/// # 示例
///
/// ```
/// use cotton_transform::apply_token_replacements;
/// use cotton_var_parse::parse_css_vars;
///
/// let usages = parse_css_vars("var(--background-bg2, #ffffff)");
/// assert_eq!(apply_token_replacements("text-[#ffffff]", &usages), "text-bg_2");
/// ```
pub fn apply_token_replacements(class: &str, usages: &[CssVarUsage]) -> String {
    if class.is_empty() || usages.is_empty() {
        return class.to_string();
    }

    let mut next = class.to_string();

    for usage in usages {
        let Some(token) = resolve_color_token(&usage.name) else {
            continue;
        };

        if let Some(fallback) = usage.fallback_text() {
            next = replace_fallback_with_token(&next, fallback, &token);
        }

        next = replace_var_expressions(&next, &usage.name, &token);
    }

    cleanup_bracket_tokens(&next)
}
