use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{config::Config, error::ApiError};

/// Exchanges the configured client credentials for a short-lived access token.
///
/// Issues a single OAuth 2.0 client-credentials grant against the configured
/// token endpoint. The returned token is an opaque string used as a bearer
/// credential on subsequent search requests; its lifetime is defined by the
/// upstream provider and not tracked here.
///
/// # Arguments
///
/// * `client` - Shared reqwest client
/// * `config` - Immutable process configuration carrying the credentials and
///   the token endpoint URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The access token extracted from the JSON response
/// - `Err(ApiError::Auth)` - The token endpoint answered with a non-200
///   status (carries that status)
/// - `Err(ApiError::Unexpected)` - Transport failure or a 200 response
///   without an `access_token` field
///
/// # Behavior
///
/// One outbound call per invocation; no caching, no retry. Empty credentials
/// are not rejected locally, they fail the grant with the upstream's status.
///
/// # Example
///
/// ```
/// let token = fetch_access_token(&client, &config).await?;
/// ```
pub async fn fetch_access_token(client: &Client, config: &Config) -> Result<String, ApiError> {
    let response = client
        .post(&config.token_url)
        .form(&[
            ("grant_type", "client_credentials"),
            ("client_id", &config.api_key),
            ("client_secret", &config.api_secret),
        ])
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(ApiError::Auth(response.status()));
    }

    let json: Value = response.json().await?;
    match json["access_token"].as_str() {
        Some(token) => Ok(token.to_string()),
        None => Err(ApiError::Unexpected(
            "token response missing access_token".to_string(),
        )),
    }
}
