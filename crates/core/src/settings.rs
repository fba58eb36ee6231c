use indexmap::IndexSet;
use serde::Deserialize;
use std::path::Path;

/// 内置的默认配置
const DEFAULT_SETTINGS_JSON: &str = include_str!("../settings.json");

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
}

/// 转换配置
///
/// JSON 格式示例：
/// ```json
/// { "noNeedStylesKey": ["font-family", "font-style"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// 不参与转换的样式属性（既不进 cssCode，也不生成原子类）
    #[serde(default)]
    pub no_need_styles_key: IndexSet<String>,
}

impl Settings {
    /// 空忽略列表
    pub fn empty() -> Self {
        Self {
            no_need_styles_key: IndexSet::new(),
        }
    }

    /// 从 JSON 字符串加载
    pub fn from_json(json_str: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// 从文件加载
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 属性是否在忽略列表中
    pub fn is_ignored(&self, property: &str) -> bool {
        self.no_need_styles_key.contains(property)
    }
}

impl Default for Settings {
    fn default() -> Self {
        // 内置 JSON 随 crate 一起编译，解析失败时退化为空列表
        Self::from_json(DEFAULT_SETTINGS_JSON).unwrap_or_else(|_| Self::empty())
    }
}

impl<S: Into<String>> FromIterator<S> for Settings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            no_need_styles_key: iter.into_iter().map(Into::into).collect(),
        }
    }
}
