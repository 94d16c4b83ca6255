use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::i18n::{
    RTL_LANGUAGE_CODES,
    is_known_language_code,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "appLanguages[0].code")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered one-error-per-line list for the `ValidationErrors` display.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One entry of the app language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLanguage {
    pub code: String,
    /// Display name of the language, keyed by the language it is written in.
    pub label: BTreeMap<String, String>,
}

/// Platform localization settings.
///
/// The deployment ships Arabic-first: the defaults pin the Iraq locale and
/// an Arabic-only catalog, and a settings file only needs to override what
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizationSettings {
    /// Locale the app renders in and falls back to.
    pub default_language: String,

    /// Languages offered in the app shell (not per-survey languages).
    pub app_languages: Vec<AppLanguage>,

    /// Locales rendered right-to-left.
    pub rtl_languages: Vec<String>,
}

impl LocalizationSettings {
    /// # Errors
    /// - Empty or unknown language codes
    /// - Empty app language catalog
    /// - Default language missing from the catalog
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_language.is_empty() {
            errors.push(ValidationError::new(
                "defaultLanguage",
                "The language cannot be empty. Please specify a language code, for example: \"ar-IQ\"",
            ));
        } else if !is_known_language_code(&self.default_language) {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!("Unknown language code '{}'", self.default_language),
            ));
        }

        if self.app_languages.is_empty() {
            errors.push(ValidationError::new(
                "appLanguages",
                "At least one language is required. Example: [{\"code\": \"ar-IQ\", \"label\": {\"ar-IQ\": \"العربية\"}}]",
            ));
        }

        for (index, language) in self.app_languages.iter().enumerate() {
            if language.code.is_empty() {
                errors.push(ValidationError::new(
                    format!("appLanguages[{index}].code"),
                    "The language code cannot be empty",
                ));
            } else if !is_known_language_code(&language.code) {
                errors.push(ValidationError::new(
                    format!("appLanguages[{index}].code"),
                    format!("Unknown language code '{}'", language.code),
                ));
            }
        }

        if !self.default_language.is_empty()
            && !self.app_languages.is_empty()
            && !self.app_languages.iter().any(|language| language.code == self.default_language)
        {
            errors.push(ValidationError::new(
                "defaultLanguage",
                format!("'{}' must be listed in 'appLanguages'", self.default_language),
            ));
        }

        for (index, code) in self.rtl_languages.iter().enumerate() {
            if !is_known_language_code(code) {
                errors.push(ValidationError::new(
                    format!("rtlLanguages[{index}]"),
                    format!("Unknown language code '{code}'"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Locale the app should render in.
    ///
    /// The deployment is pinned to its default language, so user agent
    /// preferences are not consulted.
    #[must_use]
    pub fn find_matching_locale(&self) -> &str {
        &self.default_language
    }

    /// Whether `code` is configured as a right-to-left locale.
    ///
    /// Region variants match through their primary subtag.
    #[must_use]
    pub fn is_rtl(&self, code: &str) -> bool {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        self.rtl_languages.iter().any(|rtl| rtl == code || rtl == primary)
    }
}

impl Default for LocalizationSettings {
    fn default() -> Self {
        Self {
            default_language: "ar-IQ".to_string(),
            app_languages: vec![AppLanguage {
                code: "ar-IQ".to_string(),
                label: BTreeMap::from([("ar-IQ".to_string(), "العربية".to_string())]),
            }],
            rtl_languages: RTL_LANGUAGE_CODES.iter().map(ToString::to_string).collect(),
        }
    }
}
