use std::sync::Arc;

use crate::api::{ApiError, BookingOutcome, Trip, TripId, TripService};
use crate::session::SessionClient;
use crate::ui::add_trip::TripForm;
use crate::ui::mvi::Reducer;
use crate::ui::trips::{TripBrowserIntent, TripBrowserReducer, TripBrowserState, TripView};

pub const TRIPS_LOAD_FAILED: &str = "Could not load trips. Please try again later.";
pub const BOOKING_FAILED: &str = "Failed to book the trip. Please try again later.";

/// Trip browser screen: owns its state, talks to the backend.
pub struct TripBrowser {
    service: Arc<dyn TripService>,
    state: TripBrowserState,
}

impl TripBrowser {
    pub fn new(service: Arc<dyn TripService>) -> Self {
        Self {
            service,
            state: TripBrowserState::default(),
        }
    }

    pub fn state(&self) -> &TripBrowserState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: TripBrowserIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = TripBrowserReducer::reduce(state, intent);
    }

    /// Fetch all trips. On failure the screen shows a generic message and
    /// the error is handed back.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        match self.service.list_trips().await {
            Ok(trips) => {
                self.dispatch(TripBrowserIntent::Loaded {
                    trips: views(trips),
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error fetching trips");
                self.dispatch(TripBrowserIntent::LoadFailed {
                    message: TRIPS_LOAD_FAILED.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Book a seat on `trip_id`.
    ///
    /// Only a confirmed booking touches the trip list. A declined booking
    /// comes back as `ApiError::BookingRejected` carrying the backend's reason.
    pub async fn book(&mut self, trip_id: TripId) -> Result<(), ApiError> {
        match self.service.book_trip(trip_id).await {
            Ok(BookingOutcome { success: true, .. }) => {
                tracing::info!(%trip_id, "Trip booked");
                self.dispatch(TripBrowserIntent::BookingSucceeded { trip_id });
                Ok(())
            }
            Ok(BookingOutcome { message, .. }) => {
                let message = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| BOOKING_FAILED.to_string());
                tracing::warn!(%trip_id, %message, "Booking rejected");
                self.dispatch(TripBrowserIntent::BookingRejected {
                    message: message.clone(),
                });
                Err(ApiError::BookingRejected { trip_id, message })
            }
            Err(err) => {
                tracing::warn!(%trip_id, error = %err, "Error booking trip");
                self.dispatch(TripBrowserIntent::BookingFailed {
                    message: BOOKING_FAILED.to_string(),
                });
                Err(err)
            }
        }
    }
}

fn views(trips: Vec<Trip>) -> Vec<TripView> {
    let mut rng = rand::rng();
    trips
        .into_iter()
        .map(|trip| TripView::new(trip, &mut rng))
        .collect()
}

/// Offer a new trip as the signed-in user.
pub async fn add_trip(
    service: &dyn TripService,
    session: &SessionClient,
    form: TripForm,
) -> Result<Trip, ApiError> {
    let draft = form.into_draft(session.user().map(|u| u.id))?;
    let trip = service.create_trip(&draft).await?;
    tracing::info!(trip_id = %trip.id, route = %trip.route(), "Trip added");
    Ok(trip)
}

pub async fn update_trip(
    service: &dyn TripService,
    session: &SessionClient,
    trip_id: TripId,
    form: TripForm,
) -> Result<Trip, ApiError> {
    let draft = form.into_draft(session.user().map(|u| u.id))?;
    service.update_trip(trip_id, &draft).await
}
