use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::error::ApiError;

/// A validated flight search query derived from inbound request parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub adults: String,
    pub travel_class: String,
}

impl FlightQuery {
    /// Builds a query from the raw inbound query-string parameters.
    ///
    /// Origin, destination and departure date are required and must be
    /// non-empty. `adults` defaults to `1` and is forwarded verbatim;
    /// `travelClass` defaults to `ECONOMY`. No further validation happens
    /// here, the upstream provider owns the business rules.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        let required = |key: &str| -> Result<String, ApiError> {
            match params.get(key) {
                Some(value) if !value.is_empty() => Ok(value.clone()),
                _ => Err(ApiError::MissingParameters),
            }
        };

        Ok(FlightQuery {
            origin: required("origin")?,
            destination: required("destination")?,
            departure_date: required("departureDate")?,
            adults: params
                .get("adults")
                .cloned()
                .unwrap_or_else(|| "1".to_string()),
            travel_class: params
                .get("travelClass")
                .cloned()
                .unwrap_or_else(|| "ECONOMY".to_string()),
        })
    }
}

/// One synthetic refund row.
///
/// Serialized CSV headers keep the column names of the original dataset the
/// demo tooling consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Tabled)]
pub struct RefundRecord {
    #[serde(rename = "pnr_kodu")]
    #[tabled(rename = "pnr")]
    pub pnr: String,

    #[serde(rename = "havayolu")]
    #[tabled(rename = "airline")]
    pub airline: String,

    #[serde(rename = "bilet_tutari_tl")]
    #[tabled(rename = "ticket (TL)")]
    pub ticket_amount: f64,

    #[serde(rename = "iade_edilen_tutar_tl")]
    #[tabled(rename = "refunded (TL)")]
    pub refund_amount: f64,

    #[serde(rename = "iade_tarihi")]
    #[tabled(rename = "refund date")]
    pub refund_date: String,

    #[serde(rename = "iptal_nedeni")]
    #[tabled(rename = "reason")]
    pub cancellation_reason: String,

    #[serde(rename = "son_kullanim_tarihi")]
    #[tabled(rename = "credit expiry")]
    pub credit_expiry_date: String,
}
