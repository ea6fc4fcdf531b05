use crate::app::picker::{PickerPolicy, DEFAULT_MAX_FILE_SIZE_BYTES};
use crate::config::AppPreferences;
use crate::core::SettingsProvider;
use crate::domain::model::{AspectRatio, ExperimentSettings};
use crate::utils::error::{Result, TryOnError};
use crate::utils::validation::{validate_non_empty_list, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub experiment: Option<ExperimentConfig>,
    pub picker: Option<PickerConfig>,
    pub preferences: Option<AppPreferences>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub pose_protection: Option<bool>,
    /// Kept as a string so an unsupported value is reported by `validate`
    /// with the field name instead of as a parse failure.
    pub aspect_ratio: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PickerConfig {
    pub max_file_size_mb: Option<u64>,
    pub allowed_extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TryOnError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TryOnError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TryOnError::ConfigParseError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(ratio) = self.experiment.as_ref().and_then(|e| e.aspect_ratio.as_deref()) {
            ratio
                .parse::<AspectRatio>()
                .map_err(|_| TryOnError::InvalidConfigValueError {
                    field: "experiment.aspect_ratio".to_string(),
                    value: ratio.to_string(),
                    reason: format!(
                        "Unsupported ratio. Valid ratios: {}",
                        AspectRatio::ALL.map(AspectRatio::as_str).join(", ")
                    ),
                })?;
        }

        if let Some(picker) = &self.picker {
            if let Some(mb) = picker.max_file_size_mb {
                validate_positive_number("picker.max_file_size_mb", mb, 1)?;
                if mb.checked_mul(BYTES_PER_MB).is_none() {
                    return Err(TryOnError::InvalidConfigValueError {
                        field: "picker.max_file_size_mb".to_string(),
                        value: mb.to_string(),
                        reason: "Value is too large to express in bytes".to_string(),
                    });
                }
            }
            if let Some(exts) = &picker.allowed_extensions {
                validate_non_empty_list("picker.allowed_extensions", exts)?;
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(TryOnError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl SettingsProvider for TomlConfig {
    /// Falls back to the built-in default for any missing or unparsable value;
    /// call `validate` first to surface bad values.
    fn experiment_defaults(&self) -> ExperimentSettings {
        let defaults = ExperimentSettings::default();
        let Some(experiment) = &self.experiment else {
            return defaults;
        };

        ExperimentSettings {
            pose_protection: experiment.pose_protection.unwrap_or(defaults.pose_protection),
            aspect_ratio: experiment
                .aspect_ratio
                .as_deref()
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.aspect_ratio),
        }
    }

    fn picker_policy(&self) -> PickerPolicy {
        let defaults = PickerPolicy::default();
        let Some(picker) = &self.picker else {
            return defaults;
        };

        PickerPolicy {
            max_file_size_bytes: picker
                .max_file_size_mb
                .map(|mb| mb.saturating_mul(BYTES_PER_MB))
                .unwrap_or(DEFAULT_MAX_FILE_SIZE_BYTES),
            allowed_extensions: picker
                .allowed_extensions
                .clone()
                .unwrap_or(defaults.allowed_extensions),
        }
    }

    fn preferences(&self) -> AppPreferences {
        self.preferences.unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
