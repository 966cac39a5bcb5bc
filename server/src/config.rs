//! Preview server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `SITE_DIR`: static site root, default `../site` next to this crate
//! - `CONTACT_INBOX_LIMIT`: submissions kept in memory, default 500

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTACT_INBOX_LIMIT: usize = 500;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub site_dir: PathBuf,
    pub contact_inbox_limit: usize,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Unset keys take their defaults; set
    /// but unparseable keys are errors.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparseable value or a zero inbox limit.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let site_dir = lookup("SITE_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_site_dir, PathBuf::from);
        let contact_inbox_limit =
            parse_or("CONTACT_INBOX_LIMIT", lookup("CONTACT_INBOX_LIMIT"), DEFAULT_CONTACT_INBOX_LIMIT)?;
        if contact_inbox_limit == 0 {
            return Err(ConfigError::Zero { key: "CONTACT_INBOX_LIMIT" });
        }
        Ok(Self { port, site_dir, contact_inbox_limit })
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site")
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
