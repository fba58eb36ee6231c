use serde::{Deserialize, Serialize};

/// 值字符串中一次 `var(...)` 的出现
///
/// `start..end` 是完整 `var(...)` 文本在原字符串中的字节区间（半开）。
/// 同一次解析产出的区间互不重叠，且按出现顺序排列。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CssVarUsage {
    /// 变量名（如 "--text-1"），已去除首尾空白
    pub name: String,
    /// 回退值（`var(--a, <fallback>)`），已去除首尾空白
    pub fallback: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl CssVarUsage {
    /// 非空的回退值
    ///
    /// `var(--a,)` 的回退值为空串，视同没有回退值
    pub fn fallback_text(&self) -> Option<&str> {
        self.fallback.as_deref().filter(|f| !f.is_empty())
    }

    /// 在原字符串中对应的完整 `var(...)` 文本
    pub fn source<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }
}
