//! Geocoding client against a mock Nominatim.

mod common;

use cargonaut::geocode::{Coordinate, GeocodingClient, UNKNOWN_LOCATION};
use common::geocoding_config;
use common::mock_backend::{MockBackend, MockResponse};

#[tokio::test]
async fn short_queries_make_no_request() {
    let mock = MockBackend::start().await;
    let client = GeocodingClient::new(&geocoding_config(mock.base_url())).unwrap();

    assert!(client.search("Gi").await.unwrap().is_empty());
    assert!(client.search("  ab  ").await.unwrap().is_empty());
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn search_sends_encoded_query_and_user_agent() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(
        r#"[{"display_name": "Gießen, Hessen, Deutschland", "lat": "50.5841", "lon": "8.6784"}]"#,
    )
    .await;
    let client = GeocodingClient::new(&geocoding_config(mock.base_url())).unwrap();

    let suggestions = client.search("Gießen Bahnhof").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert!((suggestions[0].lat - 50.5841).abs() < 1e-9);

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/search");
    let query = request.query.as_deref().unwrap();
    assert!(query.contains("format=json"));
    assert!(query.contains("q=Gie%C3%9Fen+Bahnhof"));
    assert!(request.header("user-agent").unwrap().starts_with("cargonaut/"));
}

#[tokio::test]
async fn reverse_returns_display_name() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(r#"{"display_name": "Marktplatz, Gießen"}"#).await;
    let client = GeocodingClient::new(&geocoding_config(mock.base_url())).unwrap();

    let name = client
        .reverse(Coordinate {
            lat: 50.5841,
            lon: 8.6784,
        })
        .await
        .unwrap();
    assert_eq!(name, "Marktplatz, Gießen");

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/reverse");
    assert!(request.query.as_deref().unwrap().contains("lat=50.5841"));
}

#[tokio::test]
async fn reverse_without_name_is_unknown_location() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(r#"{"error": "Unable to geocode"}"#).await;
    let client = GeocodingClient::new(&geocoding_config(mock.base_url())).unwrap();

    let name = client.reverse(Coordinate { lat: 0.0, lon: 0.0 }).await.unwrap();
    assert_eq!(name, UNKNOWN_LOCATION);
}

#[tokio::test]
async fn search_error_status_is_reported() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(429, "slow down")).await;
    let client = GeocodingClient::new(&geocoding_config(mock.base_url())).unwrap();

    let err = client.search("Berlin").await.unwrap_err();
    assert_eq!(err.status(), Some(429));
}
