use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;

use cotton_core::{AtomicOutput, TransformOptions};
use cotton_transform::transform_to_atomic as rs_transform_to_atomic;

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsTransformOptions {
    #[serde(default)]
    is_rem: bool,
    #[serde(default)]
    prefix: String,
}

/// 插件代码生成回调收到的选项
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct JsCodegenOptions {
    #[serde(default)]
    use_rem: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTransformResult {
    css_code: String,
    class_list: String,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsTransformOptions> for TransformOptions {
    fn from(opts: JsTransformOptions) -> Self {
        TransformOptions::new(opts.is_rem, opts.prefix)
    }
}

impl From<AtomicOutput> for JsTransformResult {
    fn from(output: AtomicOutput) -> Self {
        JsTransformResult {
            css_code: output.css_code,
            class_list: output.class_list,
        }
    }
}

fn parse_optional<T: Default + for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, JsError> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_style(style: JsValue) -> Result<IndexMap<String, String>, JsError> {
    serde_wasm_bindgen::from_value(style)
        .map_err(|e| JsError::new(&format!("Invalid style: {}", e)))
}

fn serialize_result(result: JsTransformResult) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    result
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 将样式对象转换为原子类
///
/// @param style   - `{ [property]: value }`，按声明顺序
/// @param options - `{ isRem?, prefix? }`，可选
/// @returns `{ cssCode, classList }`
#[wasm_bindgen(js_name = "transformToAtomic")]
pub fn transform_to_atomic(style: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let style = parse_style(style)?;
    let opts: JsTransformOptions = parse_optional(options)?;
    let output = rs_transform_to_atomic(&style, &opts.into());
    serialize_result(output.into())
}

/// 插件代码生成回调：返回原子类字符串
///
/// @param style   - `{ [property]: value }`
/// @param options - `{ useRem? }`，可选
#[wasm_bindgen(js_name = "renderUnocss")]
pub fn render_unocss(style: JsValue, options: JsValue) -> Result<String, JsError> {
    let style = parse_style(style)?;
    let opts: JsCodegenOptions = parse_optional(options)?;
    Ok(render(&style, opts.use_rem))
}

fn render(style: &IndexMap<String, String>, use_rem: bool) -> String {
    rs_transform_to_atomic(style, &TransformOptions::new(use_rem, "")).class_list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let opts: JsTransformOptions =
            serde_json::from_str(r#"{ "isRem": true, "prefix": "u-" }"#).unwrap();
        let opts: TransformOptions = opts.into();
        assert_eq!(opts, TransformOptions::new(true, "u-"));
    }

    #[test]
    fn test_codegen_options_default() {
        let opts: JsCodegenOptions = serde_json::from_str("{}").unwrap();
        assert!(!opts.use_rem);
    }

    #[test]
    fn test_render_keeps_style_order() {
        let style: IndexMap<String, String> = serde_json::from_str(
            r#"{ "padding": "16px", "color": "var(--text-1, #333)", "display": "flex" }"#,
        )
        .unwrap();
        assert_eq!(render(&style, false), "p-16 text-text_1 flex");
        assert_eq!(render(&style, true), "p-4 text-text_1 flex");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result: JsTransformResult = AtomicOutput {
            css_code: "padding: 16px;".to_string(),
            class_list: "p-16".to_string(),
        }
        .into();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["cssCode"], "padding: 16px;");
        assert_eq!(json["classList"], "p-16");
    }
}
