//! Configuration loading, validation, and management for Quire.
//!
//! Loads configuration from `~/.quire/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.quire/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Editor view configuration
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Request header carrying the already-resolved role of the viewer.
    #[serde(default = "default_role_header")]
    pub role_header: String,

    /// Role used when the request carries no role header.
    #[serde(default = "default_role")]
    pub default_role: String,
}

fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_role_header() -> String {
    "x-quire-role".into()
}
fn default_role() -> String {
    "editor".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            role_header: default_role_header(),
            default_role: default_role(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Upper bound on the size of one rendered edit view, in bytes.
    #[serde(default = "default_max_view_bytes")]
    pub max_view_bytes: usize,

    /// UI strings embedded in every edit view
    #[serde(default)]
    pub text: EditorText,
}

fn default_max_view_bytes() -> usize {
    4 * 1024 * 1024
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_view_bytes: default_max_view_bytes(),
            text: EditorText::default(),
        }
    }
}

/// Fixed text assets rendered into the edit view.
///
/// Button and label text is emitted as-is, so translations may carry markup.
/// Text placed in attributes or script strings is escaped for that context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorText {
    pub save: String,
    pub delete: String,
    pub approve: String,
    pub reject: String,

    /// Shown under the approve/reject buttons of pending content.
    pub approval_notice: String,

    pub delete_confirm: String,
    pub reject_confirm: String,

    pub slug_label: String,
    pub slug_placeholder: String,

    pub month_label: String,
    pub day_label: String,
    pub year_label: String,
    pub hour_label: String,
    pub minute_label: String,
    pub period_label: String,

    /// January through December.
    pub months: Vec<String>,
}

impl Default for EditorText {
    fn default() -> Self {
        Self {
            save: "Save".into(),
            delete: "Delete".into(),
            approve: "Approve".into(),
            reject: "Reject".into(),
            approval_notice: "This content is pending approval. Clicking \"Approve\" will publish it immediately. Clicking \"Reject\" will delete it.".into(),
            delete_confirm: "Please confirm:\n\nAre you sure you want to delete this content?\nThis cannot be undone.".into(),
            reject_confirm: "Please confirm:\n\nAre you sure you want to reject this post?\nDoing so will delete it, and cannot be undone.".into(),
            slug_label: "URL Slug".into(),
            slug_placeholder: "Will be set automatically".into(),
            month_label: "Month".into(),
            day_label: "DD".into(),
            year_label: "YYYY".into(),
            hour_label: "HH".into(),
            minute_label: "MM".into(),
            period_label: "Period".into(),
            months: [
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.quire/config.toml).
    ///
    /// Environment variables override the file:
    /// - `QUIRE_HOST`
    /// - `QUIRE_PORT`
    /// - `QUIRE_DEFAULT_ROLE`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("QUIRE_HOST") {
            self.gateway.host = host;
        }

        if let Some(port) = lookup("QUIRE_PORT") {
            self.gateway.port = port.parse().map_err(|_| {
                ConfigError::ValidationError(format!("QUIRE_PORT is not a valid port: {port}"))
            })?;
        }

        if let Some(role) = lookup("QUIRE_DEFAULT_ROLE") {
            self.gateway.default_role = role;
        }

        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".quire")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        let header = &self.gateway.role_header;
        if header.is_empty()
            || !header
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ConfigError::ValidationError(format!(
                "gateway.role_header must be a lowercase header name, got {header:?}"
            )));
        }

        if self.gateway.default_role.is_empty() {
            return Err(ConfigError::ValidationError(
                "gateway.default_role must not be empty".into(),
            ));
        }

        if self.editor.max_view_bytes == 0 {
            return Err(ConfigError::ValidationError(
                "editor.max_view_bytes must be > 0".into(),
            ));
        }

        if self.editor.text.months.len() != 12 {
            return Err(ConfigError::ValidationError(format!(
                "editor.text.months must list 12 months, got {}",
                self.editor.text.months.len()
            )));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the `init` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
