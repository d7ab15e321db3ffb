//! Configuration management for the TIDAL player.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including the TIDAL API location, the application token and the
//! playback quality.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! Login credentials are not part of the environment. They live in the settings
//! store and reach the session bridge as a [`SessionConfig`].

use std::{env, path::PathBuf};

use crate::management::LoginData;

const DEFAULT_API_URL: &str = "https://api.tidalhifi.com/v1";
const DEFAULT_SOUND_QUALITY: &str = "HIGH";
const DEFAULT_IMAGE_SIZE: u32 = 320;

/// Returns the directory holding the `.env` file, settings and caches.
///
/// - Linux: `~/.local/share/tidalplayer`
/// - macOS: `~/Library/Application Support/tidalplayer`
/// - Windows: `%LOCALAPPDATA%/tidalplayer`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tidalplayer");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the data directory if it doesn't exist. A missing `.env` file is not
/// an error since every variable has a default except the API token, which is
/// checked when the client is built.
///
/// # Errors
///
/// This function will return an error if:
/// - The data directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// # Example
///
/// ```
/// use tidalplayer::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the TIDAL web API base URL.
///
/// Reads `TIDAL_API_URL`, falling back to `https://api.tidalhifi.com/v1`.
/// A trailing slash is stripped so endpoint paths can be appended directly.
pub fn tidal_api_url() -> String {
    env::var("TIDAL_API_URL")
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Returns the application token sent as `X-Tidal-Token`.
///
/// # Errors
///
/// Returns an error if `TIDAL_API_TOKEN` is unset or empty.
///
/// # Security Note
///
/// The token should be kept out of logs and version control.
pub fn tidal_api_token() -> Result<String, String> {
    match env::var("TIDAL_API_TOKEN") {
        Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err("TIDAL_API_TOKEN must be set".to_string()),
    }
}

/// Returns the requested stream quality (`LOW`, `HIGH`, `LOSSLESS`).
pub fn tidal_sound_quality() -> String {
    env::var("TIDAL_SOUND_QUALITY").unwrap_or_else(|_| DEFAULT_SOUND_QUALITY.to_string())
}

/// Returns the edge length in pixels used for cover and artist image URLs.
///
/// Falls back to 320 when `TIDAL_IMAGE_SIZE` is unset or not a number.
pub fn tidal_image_size() -> u32 {
    env::var("TIDAL_IMAGE_SIZE")
        .ok()
        .and_then(|size| size.trim().parse().ok())
        .unwrap_or(DEFAULT_IMAGE_SIZE)
}

/// Everything the TIDAL client needs to talk to the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub api_token: String,
    pub sound_quality: String,
    pub image_size: u32,
}

impl ClientConfig {
    /// Builds the client configuration from the environment.
    ///
    /// # Errors
    ///
    /// Fails only when the API token is missing.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            api_url: tidal_api_url(),
            api_token: tidal_api_token()?,
            sound_quality: tidal_sound_quality(),
            image_size: tidal_image_size(),
        })
    }
}

/// Login configuration handed to the session bridge at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    pub login: String,
    pub password: String,
    pub autologin: bool,
}

impl From<&LoginData> for SessionConfig {
    fn from(data: &LoginData) -> Self {
        Self {
            login: data.login.clone(),
            password: data.password.clone(),
            autologin: data.autologin(),
        }
    }
}
