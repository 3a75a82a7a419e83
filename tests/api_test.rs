use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use flightgw::api;
use flightgw::config::Config;
use flightgw::error::ApiError;
use flightgw::server::AppState;
use flightgw::types::FlightQuery;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const OFFERS_PATH: &str = "/v2/shopping/flight-offers";

fn test_config(upstream: &str) -> Config {
    Config {
        api_key: "test-key".to_string(),
        api_secret: "test-secret".to_string(),
        token_url: format!("{}{}", upstream, TOKEN_PATH),
        api_url: upstream.to_string(),
        server_addr: "127.0.0.1:0".to_string(),
    }
}

fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

async fn mount_token_success(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "test-token" })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_relays_upstream_body_verbatim() {
    let server = MockServer::start().await;
    mount_token_success(&server).await;

    let upstream_body = json!({ "data": [ { "id": "1", "price": { "total": "1234.56" } } ] });
    Mock::given(method("GET"))
        .and(path(OFFERS_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("originLocationCode", "IST"))
        .and(query_param("destinationLocationCode", "LHR"))
        .and(query_param("departureDate", "2025-06-01"))
        .and(query_param("adults", "2"))
        .and(query_param("travelClass", "BUSINESS"))
        .and(query_param("currencyCode", "TRY"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let state = AppState::new(test_config(&server.uri()));
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
        ("adults", "2"),
        ("travelClass", "BUSINESS"),
    ]);

    let result = api::flights(State(state), Query(params)).await;
    let body = result.expect("search should succeed").0;
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn test_omitted_optionals_forward_defaults() {
    let server = MockServer::start().await;
    mount_token_success(&server).await;

    Mock::given(method("GET"))
        .and(path(OFFERS_PATH))
        .and(query_param("adults", "1"))
        .and(query_param("travelClass", "ECONOMY"))
        .and(query_param("currencyCode", "TRY"))
        .and(query_param("max", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let state = AppState::new(test_config(&server.uri()));
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
    ]);

    let result = api::flights(State(state), Query(params)).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_missing_required_params_is_bad_request() {
    // No upstream mocks: validation must fail before any outbound call.
    let state = AppState::new(test_config("http://127.0.0.1:1"));

    let cases = [
        query(&[]),
        query(&[("origin", "IST")]),
        query(&[("origin", "IST"), ("destination", "LHR")]),
        query(&[("destination", "LHR"), ("departureDate", "2025-06-01")]),
        // Empty values count as missing
        query(&[
            ("origin", ""),
            ("destination", "LHR"),
            ("departureDate", "2025-06-01"),
        ]),
    ];

    for params in cases {
        let err = api::flights(State(state.clone()), Query(params))
            .await
            .expect_err("validation should fail");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.payload()["error"], "missing parameters");
    }
}

#[tokio::test]
async fn test_token_failure_is_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let state = AppState::new(test_config(&server.uri()));
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
    ]);

    let err = api::flights(State(state), Query(params))
        .await
        .expect_err("token failure should fail the request");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        err.payload()["error"]
            .as_str()
            .unwrap()
            .contains("401")
    );
}

#[tokio::test]
async fn test_search_failure_forwards_upstream_status() {
    let server = MockServer::start().await;
    mount_token_success(&server).await;

    Mock::given(method("GET"))
        .and(path(OFFERS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let state = AppState::new(test_config(&server.uri()));
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
    ]);

    let err = api::flights(State(state), Query(params))
        .await
        .expect_err("upstream failure should fail the request");
    assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(
        err.payload()["error"]
            .as_str()
            .unwrap()
            .contains("503")
    );
}

#[tokio::test]
async fn test_unreachable_upstream_is_internal_error() {
    // Nothing listens on this address; the transport error must surface as a
    // 500 payload instead of a crash.
    let state = AppState::new(test_config("http://127.0.0.1:1"));
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
    ]);

    let err = api::flights(State(state), Query(params))
        .await
        .expect_err("unreachable upstream should fail the request");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(err.payload()["error"].as_str().is_some());
}

#[tokio::test]
async fn test_health_is_static_ok() {
    let body = api::health().await.0;
    assert_eq!(body["status"], "OK");
    assert!(body["message"].as_str().is_some());

    // Health does not depend on any other state
    let again = api::health().await.0;
    assert_eq!(body, again);
}

#[test]
fn test_flight_query_defaults() {
    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
    ]);
    let q = FlightQuery::from_params(&params).unwrap();
    assert_eq!(q.adults, "1");
    assert_eq!(q.travel_class, "ECONOMY");

    let params = query(&[
        ("origin", "IST"),
        ("destination", "LHR"),
        ("departureDate", "2025-06-01"),
        ("adults", "3"),
        ("travelClass", "FIRST"),
    ]);
    let q = FlightQuery::from_params(&params).unwrap();
    assert_eq!(q.adults, "3");
    assert_eq!(q.travel_class, "FIRST");
}

#[test]
fn test_error_mapping() {
    assert_eq!(
        ApiError::MissingParameters.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        ApiError::Auth(StatusCode::UNAUTHORIZED).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        ApiError::Upstream(StatusCode::BAD_GATEWAY).status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        ApiError::Unexpected("boom".to_string()).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(ApiError::Unexpected("boom".to_string()).payload()["error"], "boom");
}
