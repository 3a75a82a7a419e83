//! # API Module
//!
//! This module provides the HTTP endpoints served by the gateway.
//!
//! ## Endpoints
//!
//! ### Flights
//!
//! - [`flights`] - Proxies a flight-offer search to the upstream provider:
//!   validates the inbound query parameters, obtains a fresh bearer token and
//!   relays the upstream body and status to the caller.
//!
//! ### Monitoring
//!
//! - [`health`] - Liveness probe returning a fixed status payload, used by
//!   monitoring systems and deployment checks.
//!
//! ## Architecture
//!
//! Handlers are plain async functions wired into an Axum router by
//! [`crate::server`]. Every failure in the search flow is an
//! [`ApiError`](crate::error::ApiError) converted to a status code plus JSON
//! payload at this boundary; the process never crashes on a bad request or a
//! failing upstream.

mod flights;
mod health;

pub use flights::flights;
pub use health::health;
