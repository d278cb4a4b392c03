//! Address lookup against a Nominatim-compatible service.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Deserializer};

use crate::api::{decode, transport, ApiError};
use crate::config::GeocodingConfig;

/// Shown when a reverse lookup has no name for a point.
pub const UNKNOWN_LOCATION: &str = "Unknown location";

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Map center used when nothing else is known (Gießen).
pub const DEFAULT_LOCATION: Coordinate = Coordinate {
    lat: 50.586,
    lon: 8.678,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub display_name: String,
    #[serde(deserialize_with = "coordinate")]
    pub lat: f64,
    #[serde(deserialize_with = "coordinate")]
    pub lon: f64,
}

impl Suggestion {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lon: self.lon,
        }
    }
}

#[derive(Deserialize)]
struct ReversePlace {
    #[serde(default)]
    display_name: Option<String>,
}

pub struct GeocodingClient {
    http: Client,
    base_url: String,
    min_query_chars: usize,
}

impl GeocodingClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .map_err(|e| transport(&config.base_url, e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_query_chars: config.min_query_chars,
        })
    }

    /// Suggestions for free-text input. Short input yields none without a
    /// request.
    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>, ApiError> {
        let query = query.trim();
        if query.chars().count() < self.min_query_chars {
            return Ok(Vec::new());
        }

        let url = self.url("search", &[("format", "json"), ("q", query)])?;
        let body = self.get(url, "search").await?;
        decode("search", &body)
    }

    /// Name of the place at `point`.
    pub async fn reverse(&self, point: Coordinate) -> Result<String, ApiError> {
        let lat = point.lat.to_string();
        let lon = point.lon.to_string();
        let url = self.url(
            "reverse",
            &[("format", "json"), ("lat", &lat), ("lon", &lon)],
        )?;
        let body = self.get(url, "reverse").await?;
        let place: ReversePlace = decode("reverse", &body)?;

        Ok(place
            .display_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()))
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let raw = format!("{}/{}", self.base_url, path);
        Url::parse_with_params(&raw, params).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn get(&self, url: Url, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(%url, "Geocoding lookup");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport(endpoint, e))?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| transport(endpoint, e))?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), endpoint, "Failed to fetch location suggestions");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        Ok(bytes.to_vec())
    }
}

/// Nominatim sends coordinates as strings; accept plain numbers as well.
fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_parses_string_coordinates() {
        let json = r#"[{"display_name": "Gießen, Hessen", "lat": "50.5841", "lon": "8.6784", "osm_id": 1}]"#;
        let list: Vec<Suggestion> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].display_name, "Gießen, Hessen");
        assert!((list[0].lat - 50.5841).abs() < 1e-9);
        assert!((list[0].coordinate().lon - 8.6784).abs() < 1e-9);
    }

    #[test]
    fn suggestion_accepts_numbers() {
        let json = r#"{"display_name": "X", "lat": 1.5, "lon": -2}"#;
        let s: Suggestion = serde_json::from_str(json).unwrap();
        assert_eq!(s.coordinate(), Coordinate { lat: 1.5, lon: -2.0 });
    }

    #[test]
    fn garbage_coordinate_is_rejected() {
        let json = r#"{"display_name": "X", "lat": "north", "lon": "1"}"#;
        assert!(serde_json::from_str::<Suggestion>(json).is_err());
    }
}
