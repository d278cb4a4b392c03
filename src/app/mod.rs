//! Controllers: run backend calls and feed the outcomes to the screen
//! reducers.

mod account;
mod dashboard;
mod trips;

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::geocode::GeocodingClient;
use crate::session::{SessionActor, SessionClient, SessionStore};

pub use account::{Account, LOGIN_FAILED_TITLE};
pub use dashboard::{Dashboard, DASHBOARD_LOAD_FAILED, RATING_FAILED};
pub use trips::{add_trip, update_trip, TripBrowser, BOOKING_FAILED, TRIPS_LOAD_FAILED};

/// Everything a front-end needs, wired from one config.
pub struct App {
    pub config: Config,
    pub session: SessionClient,
    pub api: Arc<ApiClient>,
    pub geocoding: GeocodingClient,
}

impl App {
    /// Start the session actor and build the clients.
    ///
    /// Must run inside a tokio runtime.
    pub fn bootstrap(config: Config) -> Result<Self, ApiError> {
        let store = SessionStore::new(config.session_path());
        let session = SessionActor::spawn(store);
        let api = Arc::new(ApiClient::new(&config.api, session.clone())?);
        let geocoding = GeocodingClient::new(&config.geocoding)?;

        tracing::debug!(
            base_url = api.base_url(),
            signed_in = session.is_authenticated(),
            "Client ready"
        );

        Ok(Self {
            config,
            session,
            api,
            geocoding,
        })
    }

    pub fn account(&self) -> Account {
        Account::new(self.api.clone(), self.session.clone())
    }

    pub fn trip_browser(&self) -> TripBrowser {
        TripBrowser::new(self.api.clone())
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::new(self.api.clone(), self.session.clone())
    }

    pub fn max_stars(&self) -> u32 {
        self.config.display.max_stars
    }
}
