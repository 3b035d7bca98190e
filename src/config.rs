//! Configuration management for Shufflerion.
//!
//! The core components take their configuration as plain values. This module is
//! where the command line front end gets those values from: environment
//! variables, optionally seeded from a `.env` file in the local data directory.
//!
//! The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{collections::BTreeSet, env, net::SocketAddr, path::PathBuf, str::FromStr};

use crate::{error::ConfigError, utils};

pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str = "streaming user-modify-playback-state user-read-playback-state";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_TRACK_URI: &str = "spotify:track:2s99JIa7LENyy9vmtBCrwR";

/// Where the build placed the `.env.example` template.
pub const ENV_TEMPLATE: &str = env!("SHUFFLERION_ENV_TEMPLATE");

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under `shufflerion/.env` in the platform specific
/// local data directory:
/// - Linux: `~/.local/share/shufflerion/.env`
/// - macOS: `~/Library/Application Support/shufflerion/.env`
/// - Windows: `%LOCALAPPDATA%/shufflerion/.env`
///
/// The directory is created if it doesn't exist. A missing file is not an
/// error, since every setting can also come straight from the environment.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("shufflerion/.env");
    path
}

/// Everything the front end needs to log in and start playback.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub redirect_uri: String,
    pub scopes: BTreeSet<String>,
    pub auth_url: String,
    pub api_url: String,
    pub server_addr: SocketAddr,
    pub track_uri: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SPOTIFY_API_AUTH_CLIENT_ID` | required |
    /// | `SPOTIFY_API_REDIRECT_URI` | `http://127.0.0.1:8888/callback` |
    /// | `SPOTIFY_API_AUTH_SCOPE` | `streaming user-modify-playback-state user-read-playback-state` |
    /// | `SPOTIFY_API_AUTH_URL` | `https://accounts.spotify.com/authorize` |
    /// | `SPOTIFY_API_URL` | `https://api.spotify.com` |
    /// | `SERVER_ADDRESS` | `127.0.0.1:8888` |
    /// | `SHUFFLERION_TRACK_URI` | `spotify:track:2s99JIa7LENyy9vmtBCrwR` |
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] if the client id is unset or empty
    /// - [`ConfigError::Invalid`] if `SERVER_ADDRESS` is not a socket address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let client_id = lookup("SPOTIFY_API_AUTH_CLIENT_ID")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("SPOTIFY_API_AUTH_CLIENT_ID"))?;

        let server_address = var("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS);
        let server_addr =
            SocketAddr::from_str(&server_address).map_err(|e| ConfigError::Invalid {
                name: "SERVER_ADDRESS",
                reason: e.to_string(),
            })?;

        Ok(Config {
            client_id,
            redirect_uri: var("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI),
            scopes: utils::parse_scopes(&var("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)),
            auth_url: var("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            api_url: var("SPOTIFY_API_URL", DEFAULT_API_URL),
            server_addr,
            track_uri: var("SHUFFLERION_TRACK_URI", DEFAULT_TRACK_URI),
        })
    }
}
