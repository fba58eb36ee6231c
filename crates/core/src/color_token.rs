//! 设计稿颜色变量 → 语义 token 映射
//!
//! 规则表有序、封闭：新增设计 token 时追加规则，而不是泛化匹配。
//! 命中顺序即优先级（first match wins）。

use once_cell::sync::Lazy;
use regex::Regex;

/// token 构造方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenBuilder {
    /// 前缀 + 捕获到的数字序号（如 `bg` + `2` → `bg_2`）
    Indexed(&'static str),
    /// 固定 token 名
    Fixed(&'static str),
}

impl TokenBuilder {
    fn build(&self, index: Option<&str>) -> Option<String> {
        match self {
            TokenBuilder::Indexed(prefix) => index.map(|n| format!("{}_{}", prefix, n)),
            TokenBuilder::Fixed(token) => Some((*token).to_string()),
        }
    }
}

/// 单条颜色 token 规则
#[derive(Debug, Clone, Copy)]
pub struct ColorTokenRule {
    /// 匹配去掉 `--` 前缀后的变量名（整名匹配，大小写不敏感）
    pub pattern: &'static str,
    pub builder: TokenBuilder,
}

pub static COLOR_TOKEN_RULES: &[ColorTokenRule] = &[
    ColorTokenRule {
        pattern: r"^background-bg([0-9]+)$",
        builder: TokenBuilder::Indexed("bg"),
    },
    ColorTokenRule {
        pattern: r"^text-symbol-text-([0-9]+)$",
        builder: TokenBuilder::Indexed("text"),
    },
    ColorTokenRule {
        pattern: r"^text-([0-9]+)$",
        builder: TokenBuilder::Indexed("text"),
    },
    ColorTokenRule {
        pattern: r"^norm-brand_pink$",
        builder: TokenBuilder::Fixed("brand_pink"),
    },
    ColorTokenRule {
        pattern: r"^norm-brand_blue$",
        builder: TokenBuilder::Fixed("brand_blue"),
    },
    ColorTokenRule {
        pattern: r"^line-line_light$",
        builder: TokenBuilder::Fixed("line_light"),
    },
];

static COMPILED_RULES: Lazy<Vec<(Regex, TokenBuilder)>> = Lazy::new(|| {
    COLOR_TOKEN_RULES
        .iter()
        .map(|rule| {
            let re = Regex::new(&format!("(?i){}", rule.pattern))
                .expect("color token pattern must be a valid regex");
            (re, rule.builder)
        })
        .collect()
});

/// 将 CSS 自定义属性名解析为颜色 token
///
/// # 示例
///
/// ```
/// use cotton_core::color_token::resolve_color_token;
///
/// assert_eq!(resolve_color_token("--background-bg2"), Some("bg_2".to_string()));
/// assert_eq!(resolve_color_token("--unknown"), None);
/// ```
pub fn resolve_color_token(variable_name: &str) -> Option<String> {
    let normalized = variable_name.strip_prefix("--").unwrap_or(variable_name);

    COMPILED_RULES.iter().find_map(|(re, builder)| {
        let caps = re.captures(normalized)?;
        builder.build(caps.get(1).map(|m| m.as_str()))
    })
}
