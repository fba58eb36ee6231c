use super::property_map::{
    get_color_keyword, get_color_prefix, get_keyword_class, get_length_prefix, is_keyword_property,
    is_negatable,
};
use super::ClassGenerator;
use crate::normalize::format_number;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)$").unwrap());

static INTEGER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

/// 数值 + 单位（`0rem`、`12%`、`1.5em`）
static DIMENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:[a-zA-Z]+|%)$").unwrap());

const BORDER_STYLES: &[&str] = &[
    "solid", "dashed", "dotted", "double", "none", "hidden", "groove", "ridge", "inset", "outset",
];

const BORDER_WIDTH_KEYWORDS: &[&str] = &["thin", "medium", "thick"];

/// 内置的 UnoCSS 风格原子类生成器
///
/// 覆盖设计稿常见属性；无法识别的属性输出任意属性形式 `[property:value]`。
/// 结果保留原始单位（如 `p-16px`），数值规范化由 [`crate::normalize_class`] 负责。
///
/// # 示例
///
/// ```
/// use cotton_transform::{ClassGenerator, UnoClassGenerator};
///
/// let generator = UnoClassGenerator;
/// assert_eq!(generator.generate("padding: 16px", false), vec!["p-16px"]);
/// assert_eq!(generator.generate("padding: 16px", true), vec!["p-4"]);
/// assert_eq!(generator.generate("color: #fff", false), vec!["text-[#fff]"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UnoClassGenerator;

impl ClassGenerator for UnoClassGenerator {
    fn generate(&self, declaration: &str, is_rem: bool) -> Vec<String> {
        let Some((property, value)) = declaration.split_once(':') else {
            return Vec::new();
        };

        let property = property.trim().to_ascii_lowercase();
        let (value, important) = strip_important(value.trim());
        if property.is_empty() || value.is_empty() {
            return Vec::new();
        }

        let class = convert(&property, value, is_rem);
        if important {
            vec![mark_important(&class)]
        } else {
            vec![class]
        }
    }
}

fn strip_important(value: &str) -> (&str, bool) {
    match value.strip_suffix("!important") {
        Some(rest) => (rest.trim_end(), true),
        None => (value, false),
    }
}

fn mark_important(class: &str) -> String {
    class
        .split(' ')
        .map(|c| format!("!{}", c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 单条声明 → 原子类（可能是空格分隔的多个类）
fn convert(property: &str, value: &str, is_rem: bool) -> String {
    if is_keyword_property(property) {
        return get_keyword_class(property, &value.to_ascii_lowercase())
            .map(str::to_string)
            .unwrap_or_else(|| arbitrary_property(property, value));
    }

    if let Some(prefix) = border_shorthand_prefix(property) {
        return border_shorthand(prefix, value, is_rem);
    }

    if let Some(prefix) = get_length_prefix(property) {
        return length_class(prefix, value, is_rem);
    }

    if let Some(prefix) = get_color_prefix(property) {
        return color_class(prefix, value);
    }

    match property {
        "opacity" => opacity_class(value),
        "z-index" => z_index_class(value),
        "font-weight" => font_weight_class(value),
        "flex" => flex_class(value),
        "flex-grow" => flex_factor_class("grow", value),
        "flex-shrink" => flex_factor_class("shrink", value),
        _ => arbitrary_property(property, value),
    }
}

fn border_shorthand_prefix(property: &str) -> Option<&'static str> {
    match property {
        "border" => Some("border"),
        "border-top" => Some("border-t"),
        "border-right" => Some("border-r"),
        "border-bottom" => Some("border-b"),
        "border-left" => Some("border-l"),
        _ => None,
    }
}

/// `1px solid #eee` → `border-1px border-solid border-[#eee]`
fn border_shorthand(prefix: &str, value: &str, is_rem: bool) -> String {
    split_top_level(value)
        .into_iter()
        .map(|part| {
            let lower = part.to_ascii_lowercase();
            if BORDER_STYLES.contains(&lower.as_str()) {
                format!("{}-{}", prefix, lower)
            } else if BORDER_WIDTH_KEYWORDS.contains(&lower.as_str()) {
                format!("{}-[{}]", prefix, lower)
            } else if is_length_like(part) {
                length_class(prefix, part, is_rem)
            } else {
                color_class(prefix, part)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_length_like(value: &str) -> bool {
    let magnitude = value.strip_prefix('-').unwrap_or(value);
    NUMBER_RE.is_match(magnitude) || DIMENSION_RE.is_match(magnitude)
}

/// 长度类：`p-16px` / `p-4`（rem）/ `w-[100%]` / `-mt-8px`
fn length_class(prefix: &str, value: &str, is_rem: bool) -> String {
    if split_top_level(value).len() != 1 {
        return format!("{}-[{}]", prefix, underscore(value));
    }

    let (negative, magnitude) = match value.strip_prefix('-') {
        Some(rest) if is_negatable(prefix) => (true, rest),
        Some(_) => return format!("{}-[{}]", prefix, value),
        None => (false, value),
    };

    let body = length_value(magnitude, is_rem);
    if negative && body != "0" {
        format!("-{}-{}", prefix, body)
    } else {
        format!("{}-{}", prefix, body)
    }
}

fn length_value(value: &str, is_rem: bool) -> String {
    if let Some(number) = value.strip_suffix("px").filter(|n| NUMBER_RE.is_match(n)) {
        let n: f64 = number.parse().unwrap_or_default();
        if n == 0.0 {
            return "0".to_string();
        }
        return if is_rem {
            format_number(n / 4.0)
        } else {
            format!("{}px", number)
        };
    }

    if NUMBER_RE.is_match(value) {
        return value.to_string();
    }

    if DIMENSION_RE.is_match(value) {
        let numeric: String = value
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if numeric.parse::<f64>().map_or(false, |n| n == 0.0) {
            return "0".to_string();
        }
    }

    format!("[{}]", underscore(value))
}

/// 颜色类：`text-[#fff]` / `bg-transparent`
fn color_class(prefix: &str, value: &str) -> String {
    match get_color_keyword(value) {
        Some(keyword) => format!("{}-{}", prefix, keyword),
        None => {
            let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
            format!("{}-[{}]", prefix, compact)
        }
    }
}

fn opacity_class(value: &str) -> String {
    if NUMBER_RE.is_match(value) {
        let n: f64 = value.parse().unwrap_or_default();
        if n <= 1.0 {
            return format!("op-{}", format_number(n * 100.0));
        }
    }
    format!("op-[{}]", underscore(value))
}

fn z_index_class(value: &str) -> String {
    if value == "auto" {
        return "z-auto".to_string();
    }
    if INTEGER_RE.is_match(value) {
        return match value.strip_prefix('-') {
            Some(abs) => format!("-z-{}", abs),
            None => format!("z-{}", value),
        };
    }
    arbitrary_property("z-index", value)
}

fn font_weight_class(value: &str) -> String {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        format!("font-{}", value.to_ascii_lowercase())
    } else {
        arbitrary_property("font-weight", value)
    }
}

fn flex_class(value: &str) -> String {
    match value {
        "1" | "auto" | "none" | "initial" => format!("flex-{}", value),
        _ => format!("flex-[{}]", underscore(value)),
    }
}

fn flex_factor_class(name: &str, value: &str) -> String {
    match value {
        "1" => name.to_string(),
        "0" => format!("{}-0", name),
        _ => format!("{}-[{}]", name, underscore(value)),
    }
}

/// 任意属性：`[property:value]`
fn arbitrary_property(property: &str, value: &str) -> String {
    format!("[{}:{}]", property, underscore(value))
}

/// 空白 → `_`
fn underscore(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// 按顶层空白拆分（括号内的空白不拆）
fn split_top_level(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start: Option<usize> = None;

    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }

        if c.is_whitespace() && depth <= 0 {
            if let Some(s) = start.take() {
                parts.push(&value[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        parts.push(&value[s..]);
    }

    parts
}
