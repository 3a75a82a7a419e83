use std::collections::HashMap;

use axum::{extract::Query, extract::State, response::Json};
use serde_json::Value;

use crate::{amadeus, error::ApiError, server::AppState, types::FlightQuery};

pub async fn flights(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let query = FlightQuery::from_params(&params)?;

    // Fresh token on every request, see amadeus module docs.
    let token = amadeus::auth::fetch_access_token(&state.client, &state.config).await?;

    let offers = amadeus::flights::search_offers(&state.client, &state.config, &token, &query).await?;

    Ok(Json(offers))
}
