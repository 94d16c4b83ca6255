//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    LocalizationSettings,
};

/// File name the settings are read from.
const SETTINGS_FILE_NAME: &str = ".survey-i18n.json";

/// Loads localization settings from a workspace.
///
/// Looks for a `.survey-i18n.json` file in the workspace root. Settings are
/// validated before they are returned, so a present-but-broken file fails
/// loudly instead of half-applying.
///
/// # Returns
/// - `Ok(Some(settings))`: settings file found, parsed and valid
/// - `Ok(None)`: no settings file (callers fall back to the defaults)
/// - `Err(ConfigError)`: read, parse or validation failure
///
/// # Errors
/// - File read errors
/// - JSON parse errors
/// - Validation errors
pub fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<LocalizationSettings>, ConfigError> {
    let config_path = workspace_root.join(SETTINGS_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Settings file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings = settings_from_json(&content)?;

    Ok(Some(settings))
}

/// Parses and validates settings from a JSON string.
///
/// The platform also stores settings as rows, so the string form is an
/// entry point of its own, not just a loader detail.
///
/// # Errors
/// - JSON parse errors
/// - Validation errors
pub fn settings_from_json(json: &str) -> Result<LocalizationSettings, ConfigError> {
    let settings: LocalizationSettings = serde_json::from_str(json)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}
