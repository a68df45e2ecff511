//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe the knobs shared by the CLI and FFI entry points.
//! - Load configuration from JSON with per-field defaults.
//!
//! # Invariants
//! - A loaded config is always validated before it is returned.
//! - Missing fields fall back to [`CoreConfig::default`].

use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Preview length used when no config overrides it.
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 100;

/// Configuration error for loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config text is not valid JSON for [`CoreConfig`].
    Parse(serde_json::Error),
    /// `log_level` is not one of `trace|debug|info|warn|error`.
    InvalidLogLevel(String),
    /// `preview_max_chars` must be positive.
    InvalidPreviewLength,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::InvalidLogLevel(level) => write!(f, "{level}"),
            Self::InvalidPreviewLength => f.write_str("preview_max_chars must be greater than 0"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLogLevel(_) | Self::InvalidPreviewLength => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime configuration for core consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files. Logging stays off when unset.
    pub log_dir: Option<PathBuf>,
    /// Maximum characters kept in derived note previews.
    pub preview_max_chars: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
        }
    }
}

impl CoreConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Checks field-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::InvalidLogLevel)?;
        if self.preview_max_chars == 0 {
            return Err(ConfigError::InvalidPreviewLength);
        }
        Ok(())
    }
}
