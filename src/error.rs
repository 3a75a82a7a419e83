use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

/// Error taxonomy for the gateway.
///
/// Every failure in the search flow is converted into one of these variants
/// and mapped to a status code plus JSON payload at the handler boundary;
/// nothing is allowed to crash the process.
#[derive(Debug)]
pub enum ApiError {
    /// A required search parameter (origin, destination, departure date) is
    /// absent or empty.
    MissingParameters,
    /// The upstream token endpoint answered with a non-200 status.
    Auth(StatusCode),
    /// The upstream flight-offers endpoint answered with a non-200 status,
    /// which is forwarded to the caller.
    Upstream(StatusCode),
    /// Anything else (transport errors, malformed upstream bodies).
    Unexpected(String),
}

impl ApiError {
    /// Status code returned to the inbound caller.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameters => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(status) => *status,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body returned to the inbound caller.
    pub fn payload(&self) -> Value {
        let message = match self {
            ApiError::MissingParameters => "missing parameters".to_string(),
            ApiError::Auth(status) => {
                format!("token request failed with status {}", status.as_u16())
            }
            ApiError::Upstream(status) => format!("upstream API error: {}", status.as_u16()),
            ApiError::Unexpected(msg) => msg.clone(),
        };

        json!({ "error": message })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.payload())).into_response()
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Unexpected(err.to_string())
    }
}
