use phf::phf_map;

/// 长度类属性 → 原子类前缀
///
/// 使用 phf 在编译期生成完美哈希表，零运行时开销
static LENGTH_PREFIX_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Spacing (间距)
    "padding" => "p",
    "padding-top" => "pt",
    "padding-right" => "pr",
    "padding-bottom" => "pb",
    "padding-left" => "pl",
    "padding-inline" => "px",
    "padding-block" => "py",
    "margin" => "m",
    "margin-top" => "mt",
    "margin-right" => "mr",
    "margin-bottom" => "mb",
    "margin-left" => "ml",
    "margin-inline" => "mx",
    "margin-block" => "my",

    // Sizing (尺寸)
    "width" => "w",
    "height" => "h",
    "min-width" => "min-w",
    "min-height" => "min-h",
    "max-width" => "max-w",
    "max-height" => "max-h",
    "flex-basis" => "basis",

    // Position (定位)
    "top" => "top",
    "right" => "right",
    "bottom" => "bottom",
    "left" => "left",
    "inset" => "inset",

    // Flexbox & Grid
    "gap" => "gap",
    "row-gap" => "gap-y",
    "column-gap" => "gap-x",

    // Typography (排版)
    "font-size" => "text",
    "line-height" => "leading",
    "letter-spacing" => "tracking",

    // Border (边框)
    "border-width" => "border",
    "border-top-width" => "border-t",
    "border-right-width" => "border-r",
    "border-bottom-width" => "border-b",
    "border-left-width" => "border-l",
    "border-radius" => "rounded",
    "border-top-left-radius" => "rounded-tl",
    "border-top-right-radius" => "rounded-tr",
    "border-bottom-right-radius" => "rounded-br",
    "border-bottom-left-radius" => "rounded-bl",
    "outline-width" => "outline",
    "outline-offset" => "outline-offset",
    "stroke-width" => "stroke",
};

/// 颜色类属性 → 原子类前缀
static COLOR_PREFIX_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "color" => "text",
    "background" => "bg",
    "background-color" => "bg",
    "border-color" => "border",
    "border-top-color" => "border-t",
    "border-right-color" => "border-r",
    "border-bottom-color" => "border-b",
    "border-left-color" => "border-l",
    "outline-color" => "outline",
    "text-decoration-color" => "decoration",
    "caret-color" => "caret",
    "accent-color" => "accent",
    "fill" => "fill",
    "stroke" => "stroke",
};

/// 关键字类属性：`property:value` → 原子类
static KEYWORD_CLASS_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // Display
    "display:flex" => "flex",
    "display:inline-flex" => "inline-flex",
    "display:block" => "block",
    "display:inline-block" => "inline-block",
    "display:inline" => "inline",
    "display:grid" => "grid",
    "display:inline-grid" => "inline-grid",
    "display:none" => "hidden",
    "display:contents" => "contents",

    // Position
    "position:static" => "static",
    "position:relative" => "relative",
    "position:absolute" => "absolute",
    "position:fixed" => "fixed",
    "position:sticky" => "sticky",

    // Flex direction / wrap
    "flex-direction:row" => "flex-row",
    "flex-direction:row-reverse" => "flex-row-reverse",
    "flex-direction:column" => "flex-col",
    "flex-direction:column-reverse" => "flex-col-reverse",
    "flex-wrap:wrap" => "flex-wrap",
    "flex-wrap:nowrap" => "flex-nowrap",
    "flex-wrap:wrap-reverse" => "flex-wrap-reverse",

    // Alignment
    "align-items:flex-start" => "items-start",
    "align-items:start" => "items-start",
    "align-items:flex-end" => "items-end",
    "align-items:end" => "items-end",
    "align-items:center" => "items-center",
    "align-items:baseline" => "items-baseline",
    "align-items:stretch" => "items-stretch",
    "align-self:auto" => "self-auto",
    "align-self:flex-start" => "self-start",
    "align-self:flex-end" => "self-end",
    "align-self:center" => "self-center",
    "align-self:stretch" => "self-stretch",
    "justify-content:flex-start" => "justify-start",
    "justify-content:start" => "justify-start",
    "justify-content:flex-end" => "justify-end",
    "justify-content:end" => "justify-end",
    "justify-content:center" => "justify-center",
    "justify-content:space-between" => "justify-between",
    "justify-content:space-around" => "justify-around",
    "justify-content:space-evenly" => "justify-evenly",

    // Typography
    "text-align:left" => "text-left",
    "text-align:center" => "text-center",
    "text-align:right" => "text-right",
    "text-align:justify" => "text-justify",
    "text-align:start" => "text-start",
    "text-align:end" => "text-end",
    "font-style:italic" => "italic",
    "font-style:normal" => "not-italic",
    "text-decoration:underline" => "underline",
    "text-decoration:line-through" => "line-through",
    "text-decoration:none" => "no-underline",
    "text-transform:uppercase" => "uppercase",
    "text-transform:lowercase" => "lowercase",
    "text-transform:capitalize" => "capitalize",
    "text-transform:none" => "normal-case",
    "white-space:nowrap" => "whitespace-nowrap",
    "white-space:normal" => "whitespace-normal",
    "white-space:pre" => "whitespace-pre",
    "white-space:pre-wrap" => "whitespace-pre-wrap",
    "white-space:pre-line" => "whitespace-pre-line",
    "word-break:break-all" => "break-all",
    "word-break:keep-all" => "break-keep",
    "vertical-align:top" => "align-top",
    "vertical-align:middle" => "align-middle",
    "vertical-align:bottom" => "align-bottom",
    "vertical-align:baseline" => "align-baseline",

    // Overflow
    "overflow:hidden" => "overflow-hidden",
    "overflow:auto" => "overflow-auto",
    "overflow:scroll" => "overflow-scroll",
    "overflow:visible" => "overflow-visible",
    "overflow-x:hidden" => "overflow-x-hidden",
    "overflow-x:auto" => "overflow-x-auto",
    "overflow-y:hidden" => "overflow-y-hidden",
    "overflow-y:auto" => "overflow-y-auto",

    // Misc
    "box-sizing:border-box" => "box-border",
    "box-sizing:content-box" => "box-content",
    "cursor:pointer" => "cursor-pointer",
    "cursor:default" => "cursor-default",
    "cursor:not-allowed" => "cursor-not-allowed",
    "visibility:hidden" => "invisible",
    "visibility:visible" => "visible",
    "pointer-events:none" => "pointer-events-none",
    "pointer-events:auto" => "pointer-events-auto",
    "border-style:solid" => "border-solid",
    "border-style:dashed" => "border-dashed",
    "border-style:dotted" => "border-dotted",
    "border-style:none" => "border-none",
};

/// 颜色关键字 → 原子类值
static COLOR_KEYWORD_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "transparent" => "transparent",
    "currentcolor" => "current",
    "inherit" => "inherit",
    "white" => "white",
    "black" => "black",
};

/// 获取长度类属性的前缀
pub fn get_length_prefix(property: &str) -> Option<&'static str> {
    LENGTH_PREFIX_MAP.get(property).copied()
}

/// 获取颜色类属性的前缀
pub fn get_color_prefix(property: &str) -> Option<&'static str> {
    COLOR_PREFIX_MAP.get(property).copied()
}

/// 获取关键字声明对应的原子类
pub fn get_keyword_class(property: &str, value: &str) -> Option<&'static str> {
    KEYWORD_CLASS_MAP
        .get(format!("{}:{}", property, value).as_str())
        .copied()
}

/// 获取颜色关键字（大小写不敏感）
pub fn get_color_keyword(value: &str) -> Option<&'static str> {
    COLOR_KEYWORD_MAP.get(value.to_ascii_lowercase().as_str()).copied()
}

/// 该属性是否由关键字表处理
pub fn is_keyword_property(property: &str) -> bool {
    matches!(
        property,
        "display"
            | "position"
            | "flex-direction"
            | "flex-wrap"
            | "align-items"
            | "align-self"
            | "justify-content"
            | "text-align"
            | "font-style"
            | "text-decoration"
            | "text-transform"
            | "white-space"
            | "word-break"
            | "vertical-align"
            | "overflow"
            | "overflow-x"
            | "overflow-y"
            | "box-sizing"
            | "cursor"
            | "visibility"
            | "pointer-events"
            | "border-style"
    )
}

/// 支持负值类（如 `-mt-4px`）的前缀
pub fn is_negatable(prefix: &str) -> bool {
    matches!(
        prefix,
        "m" | "mt" | "mr" | "mb" | "ml" | "mx" | "my" | "top" | "right" | "bottom" | "left" | "inset"
            | "tracking"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_prefix() {
        assert_eq!(get_length_prefix("padding"), Some("p"));
        assert_eq!(get_length_prefix("border-top-width"), Some("border-t"));
        assert_eq!(get_length_prefix("color"), None);
    }

    #[test]
    fn test_keyword_class() {
        assert_eq!(get_keyword_class("display", "none"), Some("hidden"));
        assert_eq!(
            get_keyword_class("justify-content", "space-between"),
            Some("justify-between")
        );
        assert_eq!(get_keyword_class("display", "table"), None);
    }

    #[test]
    fn test_color_keyword_case_insensitive() {
        assert_eq!(get_color_keyword("currentColor"), Some("current"));
        assert_eq!(get_color_keyword("WHITE"), Some("white"));
        assert_eq!(get_color_keyword("#fff"), None);
    }
}
