//! 设计稿 CSS 声明 → 原子类
//!
//! 流程（每条声明）：去注释 → 解析 `var(...)` → 替换回退值 → 生成基础类
//! → 数值规范化 → 写回颜色 token → 加前缀并拼接。

pub mod generator;
pub mod inject;
pub mod normalize;
mod pattern;
pub mod pipeline;

// Re-exports
pub use cotton_core::{AtomicOutput, Declaration, Settings, TransformOptions};
pub use generator::{ClassGenerator, UnoClassGenerator};
pub use inject::apply_token_replacements;
pub use normalize::{format_number, normalize_class};
pub use pipeline::{prepare_declaration, transform_to_atomic, PreparedDeclaration, Transformer};
