pub mod color_token;
pub mod settings;
pub mod types;

// Re-export commonly used types
pub use color_token::{resolve_color_token, ColorTokenRule, TokenBuilder, COLOR_TOKEN_RULES};
pub use settings::{Settings, SettingsError};
pub use types::{AtomicOutput, Declaration, TransformOptions};
