use crate::pattern::{guarded_number, replace_guarded};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `border-<n>`
static BORDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)border-([0-9]+)(\.[0-9]+)?").unwrap());

/// `border-x-<n>` / `border-t-<n>` ...
static BORDER_SIDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(border-[xylrtb]-)([0-9]+)(\.[0-9]+)?").unwrap());

/// `p-<n>px` / `pt-<n>px` ...
static PADDING_PX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(p[trblxy]?)-([0-9]+\.[0-9]+|[0-9]+)px(?-u:\b)").unwrap());

/// 任意位置的 `<n>px`
static PX_UNIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(-?[0-9]+(?:\.[0-9]+)?)px(?-u:\b)").unwrap());

/// `[<n>]`
static BRACKET_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([0-9]+(?:\.[0-9]+)?)\]").unwrap());

/// 无单位的 `p-<n>` / `pt-<n>` ...
static PADDING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(p[trblxy]?)-([0-9]+)(\.[0-9]+)?").unwrap());

const PRECISION: f64 = 1_000_000.0;

/// 数字格式化
///
/// 保留 6 位小数；离整数不超过一个最小单位时输出整数，
/// 其余输出去掉末尾 0 的最短小数。
///
/// - `4.000001` → `"4"`
/// - `1.5` → `"1.5"`
/// - `0.1 + 0.2` → `"0.3"`
pub fn format_number(value: f64) -> String {
    let rounded = (value * PRECISION).round() / PRECISION;
    let nearest = rounded.round();

    if ((rounded - nearest) * PRECISION).abs() <= 1.0 + 1e-6 {
        return format!("{}", nearest as i64);
    }

    let text = rounded.to_string();
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

fn scaled(number: &str, factor: f64) -> String {
    match number.parse::<f64>() {
        Ok(n) => format_number(n * factor),
        Err(_) => number.to_string(),
    }
}

/// 规范化生成的原子类中的数值
///
/// 顺序固定：
/// 1. `border-<n>` → `border-<n*4>`
/// 2. `border-[xylrtb]-<n>` → 同上，保留方向
/// 3. `p-<n>px` → `p-<n>`（显式 px 数值不缩放）
/// 4. 其余 `<n>px` → `<n>`
/// 5. `[<n>]` → `<n>`
/// 6. 原值不含 `px` 时，`p-<n>` → `p-<n*4>`
///
/// # 示例
///
/// ```
/// use cotton_transform::normalize_class;
///
/// assert_eq!(normalize_class("border-2", true), "border-8");
/// assert_eq!(normalize_class("p-16px", true), "p-16");
/// assert_eq!(normalize_class("p-4", false), "p-16");
/// ```
pub fn normalize_class(class: &str, has_px: bool) -> String {
    if class.is_empty() {
        return String::new();
    }

    let next = replace_guarded(&BORDER_RE, class, |caps| {
        let (end, number) = guarded_number(class, caps, 1, 2)?;
        Some((end, format!("border-{}", scaled(number, 4.0))))
    });

    let current = next;
    let next = replace_guarded(&BORDER_SIDE_RE, &current, |caps| {
        let (end, number) = guarded_number(&current, caps, 2, 3)?;
        Some((end, format!("{}{}", &caps[1], scaled(number, 4.0))))
    });

    let next = PADDING_PX_RE
        .replace_all(&next, |caps: &Captures<'_>| {
            format!("{}-{}", &caps[1], scaled(&caps[2], 1.0))
        })
        .into_owned();

    let next = PX_UNIT_RE.replace_all(&next, "${1}").into_owned();
    let next = BRACKET_NUMBER_RE.replace_all(&next, "${1}").into_owned();

    if has_px {
        return next;
    }

    replace_guarded(&PADDING_RE, &next, |caps| {
        let (end, number) = guarded_number(&next, caps, 2, 3)?;
        Some((end, format!("{}-{}", &caps[1], scaled(number, 4.0))))
    })
}
