pub mod parser;
pub mod substitute;
pub mod types;

// Re-export main types
pub use parser::parse_css_vars;
pub use substitute::{replace_var_fallbacks, strip_comments};
pub use types::CssVarUsage;
