use serde::{Deserialize, Serialize};

/// CSS 声明（设计工具导出的单条样式）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "padding"）
    pub property: String,
    /// 原始属性值（如 "var(--text-1, #333)"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }

    /// 输出为 `property: value;` 形式
    pub fn to_css_line(&self) -> String {
        format!("{}: {};", self.property, self.value)
    }
}

/// 转换选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformOptions {
    /// 是否按 rem 生成（px / 4 换算为间距刻度）
    #[serde(default)]
    pub is_rem: bool,
    /// 每个原子类的前缀
    #[serde(default)]
    pub prefix: String,
}

impl TransformOptions {
    pub fn new(is_rem: bool, prefix: impl Into<String>) -> Self {
        Self {
            is_rem,
            prefix: prefix.into(),
        }
    }
}

/// 输出：转换结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtomicOutput {
    /// 保留声明重建的 CSS 文本（仅用于展示/调试）
    pub css_code: String,
    /// 空格分隔的原子类列表
    pub class_list: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_css_line() {
        let decl = Declaration::new("padding", "16px");
        assert_eq!(decl.to_css_line(), "padding: 16px;");
    }

    #[test]
    fn test_options_deserialize_camel_case() {
        let opts: TransformOptions =
            serde_json::from_str(r#"{ "isRem": true, "prefix": "u-" }"#).unwrap();
        assert_eq!(opts, TransformOptions::new(true, "u-"));
    }

    #[test]
    fn test_options_defaults() {
        let opts: TransformOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.is_rem);
        assert_eq!(opts.prefix, "");
    }

    #[test]
    fn test_output_serialize_camel_case() {
        let out = AtomicOutput {
            css_code: "color: red;".to_string(),
            class_list: "text-red".to_string(),
        };
        let json = serde_json::to_string(&out).unwrap();
        assert_eq!(json, r#"{"cssCode":"color: red;","classList":"text-red"}"#);
    }
}
