//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::Arc;

use cargonaut::api::{ApiClient, User, UserId};
use cargonaut::config::{ApiConfig, GeocodingConfig, SecureString};
use cargonaut::session::{Session, SessionActor, SessionClient, SessionStore};
use tempfile::TempDir;

use mock_backend::MockBackend;

pub const TOKEN: &str = "test-token";

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn user(id: u64) -> User {
    User {
        id: UserId(id),
        email: format!("user{id}@cargonaut.de"),
        name: Some(format!("User {id}")),
        phone: None,
        roles: vec![],
    }
}

pub fn signed_out() -> SessionClient {
    SessionActor::spawn(SessionStore::ephemeral())
}

pub async fn signed_in(user_id: u64) -> SessionClient {
    let session = signed_out();
    session
        .sign_in(Session {
            token: SecureString::new(TOKEN),
            user: user(user_id),
        })
        .await
        .expect("sign in");
    session
}

pub fn api_config(base_url: String) -> ApiConfig {
    ApiConfig {
        base_url,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..ApiConfig::default()
    }
}

pub fn client(mock: &MockBackend, session: SessionClient) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(&api_config(mock.api_url()), session).expect("client"))
}

pub fn geocoding_config(base_url: String) -> GeocodingConfig {
    GeocodingConfig {
        base_url,
        ..GeocodingConfig::default()
    }
}

/// Backend JSON for one trip.
pub fn trip_json(id: u64, driver: u64, start: &str, destination: &str, space: u32) -> String {
    format!(
        r#"{{"id": {id}, "driverId": {driver}, "startPoint": "{start}", "destinationPoint": "{destination}",
            "date": "2026-11-02", "time": "08:30", "availableSpace": {space},
            "driverRating": 4.5, "bookedUsers": []}}"#
    )
}

pub fn trips_json(trips: &[String]) -> String {
    format!("[{}]", trips.join(","))
}
