//! # Amadeus Integration Module
//!
//! This module provides the client side of the gateway: authentication
//! against the Amadeus self-service API and flight-offer searches. It is the
//! only place that talks to the upstream provider.
//!
//! ## Overview
//!
//! The gateway delegates all business logic to Amadeus; this module merely
//! handles HTTP communication and error classification:
//!
//! ```text
//! HTTP Handler (api::flights)
//!          ↓
//! Amadeus Integration Layer
//!     ├── Authentication (OAuth 2.0 client-credentials grant)
//!     └── Flight Offers Search (GET /v2/shopping/flight-offers)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Amadeus Self-Service API
//! ```
//!
//! ## Authentication Strategy
//!
//! Every search request triggers a fresh token grant via
//! [`auth::fetch_access_token`]. There is no token cache and no retry: each
//! grant succeeds or fails independently of any prior token's validity, and a
//! failed grant simply fails the current request. Tokens are short-lived and
//! never persisted.
//!
//! ## Error Handling
//!
//! Both functions classify failures into the gateway's
//! [`ApiError`](crate::error::ApiError) taxonomy:
//! - non-200 from the token endpoint → `ApiError::Auth` (surfaces as 500)
//! - non-200 from the offers endpoint → `ApiError::Upstream` (status is
//!   forwarded to the inbound caller)
//! - transport errors and malformed bodies → `ApiError::Unexpected` (500)
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON deserialization of upstream responses

pub mod auth;
pub mod flights;
