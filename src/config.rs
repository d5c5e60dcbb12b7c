//! Contract configuration.
//!
//! Everything the external service's contract decides (empty-string
//! handling, accepted status codes, key spelling, envelope placement) is
//! read from here instead of being hard-coded. Loaded from YAML:
//!
//! ```yaml
//! validation:
//!   name: reject
//!   code: reject
//!   description: allow
//!   status: { kind: range, min: 0, max: 2 }
//! wire:
//!   casing: camel
//!   envelope: { layout: flat }
//!   resource_path: /api/specifications
//! ```
//!
//! Every key is optional and falls back to its default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ports::FileSystem;
use crate::validate::ValidationPolicy;
use crate::wire::{KeyConflict, WireConfig};

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ELECTRO_SPEC_CONFIG";

/// Validation rules plus wire layout for one service contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Field acceptance rules.
    pub validation: ValidationPolicy,
    /// Key spelling and envelope layout.
    pub wire: WireConfig,
}

/// Failure to load a [`ContractConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read.
    #[error("failed to read config file {}: {message}", .path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },
    /// The file is not valid YAML for this shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The wire layout gives two things the same key.
    #[error("invalid wire layout: {0}")]
    Wire(#[from] KeyConflict),
}

impl ContractConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or has
    /// values of the wrong shape, and [`ConfigError::Wire`] if the wire
    /// layout gives two things the same key.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(text)?;
        config.wire.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML file through the filesystem port.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or malformed.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, ConfigError> {
        if !fs.exists(path) {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let text = fs
            .read_to_string(path)
            .map_err(|e| ConfigError::Read { path: path.to_path_buf(), message: e.to_string() })?;
        Self::from_yaml(&text)
    }
}
