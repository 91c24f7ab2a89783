//! Plugin settings loading and saving.
//!
//! The host stores settings as a JSON object. Loading overlays that object on
//! the defaults field by field and validates the result. A field that cannot
//! be decoded is logged and falls back to its default; the other stored
//! fields are kept.

pub mod schema;

pub use schema::PluginSettings;

use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Errors from loading or saving settings.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading or writing the settings file failed.
    Io(String),

    /// Settings could not be encoded.
    Serialize(String),

    /// Settings parsed but hold an unusable value.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Settings I/O error: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Settings encoding error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid settings: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

/// Loads settings from the host's stored JSON value.
///
/// `None` (nothing stored yet) yields the defaults.
///
/// # Example
///
/// ```
/// use word_gpt_core::config::load_settings;
/// use serde_json::json;
///
/// let settings = load_settings(Some(json!({
///     "serverUrl": "https://vocab.example.com",
///     "token": "abc"
/// })))
/// .unwrap();
/// assert_eq!(settings.server_url, "https://vocab.example.com");
/// assert!(settings.is_logged_in());
/// ```
pub fn load_settings(stored: Option<Value>) -> Result<PluginSettings, ConfigError> {
    let settings = match stored {
        Some(value) => merge_stored(value),
        None => PluginSettings::default(),
    };

    settings.validate().map_err(ConfigError::Invalid)?;

    Ok(settings)
}

/// Overlays the decodable fields of `stored` on the defaults.
fn merge_stored(stored: Value) -> PluginSettings {
    let mut fields = match stored {
        Value::Object(fields) => fields,
        other => {
            log::warn!("Plugin settings are not a JSON object ({}). Using defaults.", other);
            return PluginSettings::default();
        }
    };

    if let Ok(settings) = serde_json::from_value(Value::Object(fields.clone())) {
        return settings;
    }

    fields.retain(|key, value| {
        let mut single = serde_json::Map::new();
        single.insert(key.clone(), value.clone());
        match serde_json::from_value::<PluginSettings>(Value::Object(single)) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Ignoring stored setting '{}': {}", key, e);
                false
            }
        }
    });

    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
        log::warn!("Failed to parse plugin settings: {}. Using defaults.", e);
        PluginSettings::default()
    })
}

/// Loads settings from a JSON file. A missing file yields the defaults.
pub fn load_settings_file(path: &Path) -> Result<PluginSettings, ConfigError> {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return load_settings(None);
    }

    let content = std::fs::read_to_string(path)?;
    let stored = match serde_json::from_str::<Value>(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!(
                "Settings file {} is not valid JSON: {}. Using defaults.",
                path.display(),
                e
            );
            None
        }
    };

    load_settings(stored)
}

/// Writes settings to a JSON file, creating parent directories as needed.
pub fn save_settings_file(path: &Path, settings: &PluginSettings) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ConfigError::Serialize(e.to_string()))?;
    std::fs::write(path, json)?;

    Ok(())
}
