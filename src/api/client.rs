use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::models::{
    BookingOutcome, Credentials, LoginResponse, ProfileUpdate, RatingSubmission, Trip, TripDraft,
    TripId, User,
};
use crate::api::retry::RetryPolicy;
use crate::api::service::{AccountService, TripService};
use crate::config::{bearer_header, ApiConfig};
use crate::session::SessionClient;

/// JSON client for the MyCargonaut backend.
///
/// Reads the bearer token from the session before every request; it never
/// writes the session itself.
pub struct ApiClient {
    http: Client,
    base_url: String,
    request_timeout: Duration,
    retry: RetryPolicy,
    session: SessionClient,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: SessionClient) -> Result<Self, ApiError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()
            .map_err(|e| transport(&config.base_url, e))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
            retry: RetryPolicy::from(config),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let body = self.execute(Method::GET, endpoint, None).await?;
        decode(endpoint, &body)
    }

    async fn send_json<T, B>(&self, method: Method, endpoint: &str, payload: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.execute(method, endpoint, Some(encode(payload)?)).await?;
        decode(endpoint, &body)
    }

    /// Run a request, retrying per the configured policy, and return the raw
    /// body of a 2xx response.
    async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>, ApiError> {
        let request_id = Uuid::new_v4();
        let mut attempt = 0;

        loop {
            match self.send_once(&method, endpoint, body.clone(), request_id).await {
                Ok(bytes) => return Ok(bytes),
                Err(err) if self.retry.should_retry(&method, &err, attempt) => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        %request_id,
                        %method,
                        endpoint,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    tracing::warn!(
                        %request_id,
                        %method,
                        endpoint,
                        kind = err.kind(),
                        error = %err,
                        "API request failed"
                    );
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(
        &self,
        method: &Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        request_id: Uuid,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        tracing::debug!(%request_id, %method, %url, "Sending request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(header) = self.session.token().as_ref().and_then(bearer_header) {
            builder = builder.header(AUTHORIZATION, header);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let exchange = async {
            let response = builder.send().await.map_err(|e| transport(endpoint, e))?;
            let status = response.status();
            let bytes = response.bytes().await.map_err(|e| transport(endpoint, e))?;
            Ok::<_, ApiError>((status, bytes))
        };

        let (status, bytes) = timeout(self.request_timeout, exchange)
            .await
            .map_err(|_| ApiError::Timeout {
                endpoint: endpoint.to_string(),
                seconds: self.request_timeout.as_secs(),
            })??;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        tracing::debug!(%request_id, status = status.as_u16(), bytes = bytes.len(), "Response received");
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl AccountService for ApiClient {
    /// Exchange credentials for a token and the user record.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.send_json(Method::POST, "login", credentials).await
    }

    /// Create an account. The response body is not used.
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.execute(Method::POST, "register", Some(encode(credentials)?))
            .await
            .map(|_| ())
    }

    async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.get_json("profile").await
    }

    /// Save name and phone. Callers re-fetch the profile afterwards.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.execute(Method::PUT, "profile", Some(encode(update)?))
            .await
            .map(|_| ())
    }
}

#[async_trait]
impl TripService for ApiClient {
    async fn list_trips(&self) -> Result<Vec<Trip>, ApiError> {
        self.get_json("trips").await
    }

    async fn get_trip(&self, trip_id: TripId) -> Result<Trip, ApiError> {
        self.get_json(&format!("trips/{trip_id}")).await
    }

    async fn create_trip(&self, draft: &TripDraft) -> Result<Trip, ApiError> {
        self.send_json(Method::POST, "trips", draft).await
    }

    async fn update_trip(&self, trip_id: TripId, draft: &TripDraft) -> Result<Trip, ApiError> {
        self.send_json(Method::PUT, &format!("trips/{trip_id}"), draft)
            .await
    }

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), ApiError> {
        self.execute(Method::DELETE, &format!("trips/{trip_id}"), None)
            .await
            .map(|_| ())
    }

    async fn book_trip(&self, trip_id: TripId) -> Result<BookingOutcome, ApiError> {
        let endpoint = format!("trips/{trip_id}/book");
        let body = self.execute(Method::POST, &endpoint, None).await?;
        decode(&endpoint, &body)
    }

    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<(), ApiError> {
        self.execute(Method::POST, "ratings", Some(encode(submission)?))
            .await
            .map(|_| ())
    }
}

pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|source| ApiError::MalformedResponse {
        endpoint: endpoint.to_string(),
        source,
    })
}

fn encode<B: Serialize + ?Sized>(payload: &B) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(payload).map_err(ApiError::Encode)
}

pub(crate) fn transport(endpoint: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}
