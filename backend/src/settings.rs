//! Application settings loaded via OrthoConfig.
//!
//! Values come from `SCHOLAR_*` environment variables, matching CLI flags
//! or a configuration file; anything left unset falls back to a default.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_STORAGE: &str = "json-file";

/// Where the collections are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// One pretty-printed JSON file per collection under the data directory.
    #[default]
    JsonFile,
    /// Process-local key-value store; contents vanish on restart.
    Memory,
}

impl StorageBackend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JsonFile => "json-file",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json-file" | "json_file" | "file" => Ok(Self::JsonFile),
            "memory" | "in-memory" => Ok(Self::Memory),
            _ => Err(SettingsError::UnknownStorage {
                value: value.to_owned(),
            }),
        }
    }
}

/// Settings values that cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("bind address '{value}' is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("unknown storage backend '{value}'; expected json-file or memory")]
    UnknownStorage { value: String },
}

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SCHOLAR")]
pub struct AppSettings {
    /// Socket address the HTTP server listens on.
    #[ortho_config(default = String::from(DEFAULT_BIND_ADDR))]
    pub bind_addr: String,
    /// Directory holding the JSON collection files.
    #[ortho_config(default = PathBuf::from(DEFAULT_DATA_DIR))]
    pub data_dir: PathBuf,
    /// Storage backend name: `json-file` or `memory`.
    #[ortho_config(default = String::from(DEFAULT_STORAGE))]
    pub storage: String,
}

impl AppSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .trim()
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Parsed storage backend.
    pub fn storage(&self) -> Result<StorageBackend, SettingsError> {
        self.storage.parse()
    }
}
