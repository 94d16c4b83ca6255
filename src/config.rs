//! Platform localization settings.

/// Settings file loader
mod loader;
/// Settings types and validation
mod types;

pub use loader::{
    load_from_workspace,
    settings_from_json,
};
pub use types::{
    AppLanguage,
    ConfigError,
    LocalizationSettings,
    ValidationError,
};
