use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// `[api]` table of a config file.
///
/// Only `url` is required. Supplying `token` bypasses the login flow;
/// supplying `username`/`password` makes [`crate::ZabbixApiClient::connect`]
/// log in immediately.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub basic_auth_user: Option<String>,
    pub basic_auth_password: Option<String>,
    pub token: Option<String>,
    /// Directory for the on-disk token cache. Empty string disables
    /// caching; absent means the system temp directory.
    pub cache_dir: Option<String>,
    #[serde(default)]
    pub log_communication: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|err| Error::Configuration(format!("cannot read {}: {err}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|err| Error::Configuration(format!("invalid config file: {err}")))
    }
}
