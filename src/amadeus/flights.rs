use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{config::Config, error::ApiError, types::FlightQuery};

/// Currency the upstream quotes offers in.
const CURRENCY_CODE: &str = "TRY";

/// Result cap forwarded to the upstream on every search.
const MAX_RESULTS: &str = "10";

/// Searches flight offers for a validated query using a bearer token.
///
/// Issues a GET request to the upstream flight-offers endpoint with the
/// query's parameters plus the fixed currency code and result cap. On HTTP
/// 200 the upstream JSON body is returned verbatim; the gateway never
/// reshapes it.
///
/// # Arguments
///
/// * `client` - Shared reqwest client
/// * `config` - Immutable process configuration carrying the API base URL
/// * `token` - Access token from [`fetch_access_token`](super::auth::fetch_access_token)
/// * `query` - Validated search parameters
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The upstream response body, unmodified
/// - `Err(ApiError::Upstream)` - Non-200 upstream status, forwarded to the
///   inbound caller
/// - `Err(ApiError::Unexpected)` - Transport failure or a non-JSON body
pub async fn search_offers(
    client: &Client,
    config: &Config,
    token: &str,
    query: &FlightQuery,
) -> Result<Value, ApiError> {
    let api_url = format!("{}/v2/shopping/flight-offers", config.api_url);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .query(&[
            ("originLocationCode", query.origin.as_str()),
            ("destinationLocationCode", query.destination.as_str()),
            ("departureDate", query.departure_date.as_str()),
            ("adults", query.adults.as_str()),
            ("travelClass", query.travel_class.as_str()),
            ("currencyCode", CURRENCY_CODE),
            ("max", MAX_RESULTS),
        ])
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(ApiError::Upstream(response.status()));
    }

    Ok(response.json().await?)
}
