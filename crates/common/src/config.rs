use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Replaced with the session's username in home and jail templates
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Session layout for every user of the server.
///
/// ```toml
/// bucket = "bucket"
/// home = "users/{username}"
/// jail = "users"
///
/// [filesystems.default]
/// type = "memory"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JailConfig {
    /// Bucket every session stores into
    #[serde(default)]
    pub bucket: String,
    /// Home directory template, relative to the bucket
    #[serde(default)]
    pub home: String,
    /// Jail template; empty disables containment
    #[serde(default)]
    pub jail: String,
    /// Filesystems bound to users
    #[serde(default)]
    pub filesystems: FilesystemsConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilesystemsConfig {
    /// Used for any user without an entry in `users`
    #[serde(default)]
    pub default: Option<FilesystemConfig>,
    #[serde(default)]
    pub users: BTreeMap<String, FilesystemConfig>,
}

/// Where a user's objects live. Tagged by `type` in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilesystemConfig {
    /// Nothing persisted; contents vanish with the process
    Memory,

    /// Objects stored as files below `path`
    Local { path: PathBuf },

    /// Any S3 API endpoint
    S3 {
        endpoint: String,
        /// Left to the client library when unset
        region: Option<String>,
    },
}

impl fmt::Display for FilesystemConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilesystemConfig::Memory => write!(f, "memory"),
            FilesystemConfig::Local { path } => write!(f, "local {}", path.display()),
            FilesystemConfig::S3 {
                endpoint,
                region: Some(region),
            } => write!(f, "s3 {} ({})", endpoint, region),
            FilesystemConfig::S3 {
                endpoint,
                region: None,
            } => write!(f, "s3 {}", endpoint),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl JailConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
