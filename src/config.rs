//! Configuration management for the flight gateway.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files. All runtime configuration is collected into a
//! single immutable [`Config`] value that is built once at process start and
//! passed explicitly to the server and the Amadeus client; nothing reads the
//! environment after startup.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Default Amadeus OAuth2 token endpoint (client-credentials grant).
pub const DEFAULT_TOKEN_URL: &str = "https://test.api.amadeus.com/v1/security/oauth2/token";

/// Default Amadeus API base URL.
pub const DEFAULT_API_URL: &str = "https://test.api.amadeus.com";

/// Default bind address for the gateway server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:5000";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `flightgw/.env`. This allows users to store
/// credentials without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/flightgw/.env`
/// - macOS: `~/Library/Application Support/flightgw/.env`
/// - Windows: `%LOCALAPPDATA%/flightgw/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded or absent.
/// A missing `.env` file is not an error: credentials may come from the
/// process environment, and missing credentials surface later as an upstream
/// authentication failure rather than a startup failure.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - An existing `.env` file cannot be read or parsed
///
/// # Example
///
/// ```
/// use flightgw::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("flightgw/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Immutable process-wide configuration.
///
/// Built once from the environment at startup and passed explicitly into the
/// server state and the Amadeus client functions. Credentials are not
/// validated here; empty credentials fail the token grant with the upstream's
/// status code.
#[derive(Debug, Clone)]
pub struct Config {
    /// Amadeus API client identifier (`AMADEUS_API_KEY`).
    pub api_key: String,
    /// Amadeus API client secret (`AMADEUS_API_SECRET`).
    pub api_secret: String,
    /// OAuth2 token endpoint (`AMADEUS_TOKEN_URL`, full URL).
    pub token_url: String,
    /// Amadeus API base URL (`AMADEUS_API_URL`).
    pub api_url: String,
    /// Bind address for the gateway server (`SERVER_ADDRESS`).
    pub server_addr: String,
}

impl Config {
    /// Builds the configuration from the current process environment.
    ///
    /// Endpoint URLs and the server address fall back to their defaults when
    /// unset; the URL overrides exist mainly so tests can point the gateway
    /// at a mocked upstream.
    pub fn from_env() -> Self {
        Config {
            api_key: env::var("AMADEUS_API_KEY").unwrap_or_default(),
            api_secret: env::var("AMADEUS_API_SECRET").unwrap_or_default(),
            token_url: env::var("AMADEUS_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_url: env::var("AMADEUS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
        }
    }
}
