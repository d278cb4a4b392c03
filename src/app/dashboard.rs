use std::sync::Arc;

use crate::api::{ApiError, TripId, TripService, User, UserId};
use crate::session::SessionClient;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::mvi::Reducer;
use crate::ui::rating::{RatingDialogState, RatingIntent};

pub const DASHBOARD_LOAD_FAILED: &str = "Failed to load trips. Please try again.";
pub const RATING_FAILED: &str = "Failed to submit rating. Please try again.";

pub struct Dashboard {
    service: Arc<dyn TripService>,
    session: SessionClient,
    state: DashboardState,
}

impl Dashboard {
    pub fn new(service: Arc<dyn TripService>, session: SessionClient) -> Self {
        Self {
            service,
            session,
            state: DashboardState::default(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: DashboardIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = DashboardReducer::reduce(state, intent);
    }

    pub async fn load(&mut self) -> Result<(), ApiError> {
        let user = self.signed_in_user()?;
        match self.service.list_trips().await {
            Ok(trips) => {
                self.dispatch(DashboardIntent::Loaded { trips, user });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error fetching trips");
                self.dispatch(DashboardIntent::LoadFailed {
                    message: DASHBOARD_LOAD_FAILED.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Who gets rated for `trip_id` when no one is named: the driver of a
    /// booked trip.
    pub fn default_target(&self, trip_id: TripId) -> Option<UserId> {
        self.state
            .board()?
            .booked
            .iter()
            .find(|trip| trip.id == trip_id)
            .map(|trip| trip.driver_id)
    }

    pub fn open_rating(&mut self, trip_id: TripId, target: UserId) {
        self.dispatch(DashboardIntent::Rating(RatingIntent::Open { trip_id, target }));
    }

    pub fn select(&mut self, value: i64) {
        self.dispatch(DashboardIntent::Rating(RatingIntent::Select(value)));
    }

    /// Send the selected rating and reload.
    ///
    /// The selection is validated first; an invalid one never reaches the
    /// backend. Once the backend has stored the rating the call succeeds, even
    /// if the reload afterwards fails.
    pub async fn submit_rating(&mut self) -> Result<(), ApiError> {
        let voter = self.signed_in_user()?;
        let dialog = self
            .state
            .rating()
            .cloned()
            .unwrap_or(RatingDialogState::Hidden);

        let submission = match dialog.submission(voter.id) {
            Ok(submission) => submission,
            Err(err) => {
                self.dispatch(DashboardIntent::RatingFailed {
                    message: err.to_string(),
                });
                return Err(err.into());
            }
        };

        if let Err(err) = self.service.submit_rating(&submission).await {
            tracing::warn!(trip_id = %submission.trip_id, error = %err, "Error submitting rating");
            self.dispatch(DashboardIntent::RatingFailed {
                message: RATING_FAILED.to_string(),
            });
            return Err(err);
        }

        tracing::info!(
            trip_id = %submission.trip_id,
            user_id = %submission.user_id,
            value = submission.rating_value.get(),
            "Rating submitted"
        );
        self.dispatch(DashboardIntent::RatingSubmitted);
        self.reload_after_rating(voter).await;
        Ok(())
    }

    /// Refresh the board, keeping the current one if the fetch fails.
    async fn reload_after_rating(&mut self, user: User) {
        match self.service.list_trips().await {
            Ok(trips) => self.dispatch(DashboardIntent::Loaded { trips, user }),
            Err(err) => {
                tracing::warn!(error = %err, "Reload after rating failed, keeping previous trips");
            }
        }
    }

    fn signed_in_user(&self) -> Result<User, ApiError> {
        self.session.user().ok_or(ApiError::NotAuthenticated)
    }
}
