use crate::generator::{ClassGenerator, UnoClassGenerator};
use crate::inject::apply_token_replacements;
use crate::normalize::normalize_class;
use cotton_core::{AtomicOutput, Declaration, Settings, TransformOptions};
use cotton_var_parse::{parse_css_vars, replace_var_fallbacks, strip_comments, CssVarUsage};
use indexmap::IndexMap;
use serde::Serialize;

/// 单条声明的中间结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedDeclaration {
    pub key: String,
    /// 去注释、trim 后的原始值
    pub css_value: String,
    /// 用回退值替换 `var(...)` 后的值，交给生成器
    pub uno_value: String,
    pub css_vars: Vec<CssVarUsage>,
    /// `uno_value` 是否包含 `px`
    pub has_px: bool,
    /// 生成器的第一个候选（可能为空）
    pub generated_class: String,
}

impl PreparedDeclaration {
    /// 规范化数值并写回 token 后的最终原子类
    pub fn finalize(&self) -> String {
        let normalized = normalize_class(&self.generated_class, self.has_px);
        let injected = apply_token_replacements(&normalized, &self.css_vars);

        tracing::trace!(
            key = %self.key,
            generated = %self.generated_class,
            normalized = %normalized,
            injected = %injected,
            "finalize class"
        );

        injected
    }

    pub fn declaration(&self) -> Declaration {
        Declaration::new(self.key.clone(), self.css_value.clone())
    }
}

/// 预处理单条声明：去注释 → 解析 var → 替换回退值 → 调用生成器
pub fn prepare_declaration<G: ClassGenerator + ?Sized>(
    key: &str,
    raw_value: &str,
    is_rem: bool,
    generator: &G,
) -> PreparedDeclaration {
    let without_comments = strip_comments(raw_value);
    let css_value = without_comments.trim().to_string();
    let css_vars = parse_css_vars(&css_value);
    let uno_value = replace_var_fallbacks(&css_value, &css_vars).trim().to_string();
    let has_px = uno_value.contains("px");

    let generated_class = generator.first_candidate(&format!("{}: {}", key, uno_value), is_rem);
    if generated_class.is_empty() {
        tracing::debug!(key, value = %uno_value, "generator returned no class");
    }

    PreparedDeclaration {
        key: key.to_string(),
        css_value,
        uno_value,
        css_vars,
        has_px,
        generated_class,
    }
}

/// 转换器：生成器 + 配置
///
/// # 示例
///
/// ```
/// use cotton_core::TransformOptions;
/// use cotton_transform::Transformer;
/// use indexmap::IndexMap;
///
/// let mut style = IndexMap::new();
/// style.insert("color".to_string(), "var(--background-bg2, #ffffff)".to_string());
/// style.insert("padding".to_string(), "16px".to_string());
///
/// let output = Transformer::builtin().transform(&style, &TransformOptions::default());
/// assert_eq!(output.class_list, "text-bg_2 p-16");
/// ```
pub struct Transformer<G = UnoClassGenerator> {
    generator: G,
    settings: Settings,
}

impl<G: ClassGenerator> Transformer<G> {
    /// 使用默认配置创建
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            settings: Settings::default(),
        }
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// 预处理所有未被忽略的声明（保持输入顺序）
    pub fn prepare(&self, style: &IndexMap<String, String>, is_rem: bool) -> Vec<PreparedDeclaration> {
        style
            .iter()
            .filter(|(key, _)| {
                let ignored = self.settings.is_ignored(key);
                if ignored {
                    tracing::debug!(key = %key, "skip ignored style key");
                }
                !ignored
            })
            .map(|(key, value)| prepare_declaration(key, value, is_rem, &self.generator))
            .collect()
    }

    /// 将样式映射转换为原子类
    pub fn transform(&self, style: &IndexMap<String, String>, options: &TransformOptions) -> AtomicOutput {
        let prepared = self.prepare(style, options.is_rem);

        let css_code = prepared
            .iter()
            .map(|p| p.declaration().to_css_line())
            .collect::<Vec<_>>()
            .join("\n");

        let class_list = prepared
            .iter()
            .map(PreparedDeclaration::finalize)
            .filter(|class| !class.is_empty())
            .map(|class| format!("{}{}", options.prefix, class))
            .collect::<Vec<_>>()
            .join(" ");

        AtomicOutput {
            css_code,
            class_list,
        }
    }
}

impl Transformer {
    /// 内置生成器 + 默认配置
    pub fn builtin() -> Self {
        Self::new(UnoClassGenerator)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::builtin()
    }
}

/// 使用内置生成器和默认配置转换
pub fn transform_to_atomic(style: &IndexMap<String, String>, options: &TransformOptions) -> AtomicOutput {
    Transformer::builtin().transform(style, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn style(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prepare_declaration() {
        let prepared = prepare_declaration(
            "color",
            " var(--background-bg2, #ffffff) /* Bg/2 */ ",
            false,
            &UnoClassGenerator,
        );
        assert_eq!(prepared.css_value, "var(--background-bg2, #ffffff)");
        assert_eq!(prepared.uno_value, "#ffffff");
        assert_eq!(prepared.css_vars.len(), 1);
        assert!(!prepared.has_px);
        assert_eq!(prepared.generated_class, "text-[#ffffff]");
        assert_eq!(prepared.finalize(), "text-bg_2");
    }

    #[test]
    fn test_prepared_declaration_serializes() {
        let prepared = prepare_declaration("padding", "4", false, &UnoClassGenerator);
        let json = serde_json::to_value(&prepared).unwrap();
        assert_eq!(json["unoValue"], "4");
        assert_eq!(json["hasPx"], false);
        assert_eq!(json["generatedClass"], "p-4");
        assert_eq!(prepared.finalize(), "p-16");
    }

    #[test]
    fn test_generator_receives_resolved_declaration() {
        let seen = std::sync::Mutex::new(Vec::new());
        let generator = |decl: &str, is_rem: bool| {
            seen.lock().unwrap().push((decl.to_string(), is_rem));
            Vec::<String>::new()
        };
        prepare_declaration("border", "1px solid var(--x, red)", true, &generator);
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![("border: 1px solid red".to_string(), true)]
        );
    }

    #[test]
    fn test_transform_basic() {
        let output = transform_to_atomic(
            &style(&[("padding", "16px"), ("display", "flex")]),
            &TransformOptions::default(),
        );
        assert_eq!(output.class_list, "p-16 flex");
        assert_eq!(output.css_code, "padding: 16px;\ndisplay: flex;");
    }

    #[test]
    fn test_transform_prefix() {
        let output = transform_to_atomic(
            &style(&[("padding", "16px"), ("display", "flex")]),
            &TransformOptions::new(false, "u-"),
        );
        assert_eq!(output.class_list, "u-p-16 u-flex");
    }

    #[test]
    fn test_transform_ignored_keys() {
        let transformer = Transformer::builtin()
            .with_settings(["font-family"].into_iter().collect());
        let output = transformer.transform(
            &style(&[("font-family", "PingFang SC"), ("color", "#333")]),
            &TransformOptions::default(),
        );
        assert_eq!(output.css_code, "color: #333;");
        assert_eq!(output.class_list, "text-[#333]");
    }

    #[test]
    fn test_empty_fragment_dropped_but_css_kept() {
        let generator = |decl: &str, _: bool| {
            if decl.starts_with("color") {
                vec!["text-red".to_string()]
            } else {
                Vec::new()
            }
        };
        let transformer = Transformer::new(generator).with_settings(Settings::empty());
        let output = transformer.transform(
            &style(&[("width", ""), ("color", "red")]),
            &TransformOptions::new(false, "x-"),
        );
        assert_eq!(output.class_list, "x-text-red");
        assert_eq!(output.css_code, "width: ;\ncolor: red;");
    }
}
