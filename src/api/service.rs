use async_trait::async_trait;

use crate::api::error::ApiError;
use crate::api::models::{
    BookingOutcome, Credentials, LoginResponse, ProfileUpdate, RatingSubmission, Trip, TripDraft,
    TripId, User,
};

/// Trip operations the screens depend on.
///
/// `ApiClient` is the production implementation; screens only see this trait
/// so they can be driven by any backend.
#[async_trait]
pub trait TripService: Send + Sync {
    async fn list_trips(&self) -> Result<Vec<Trip>, ApiError>;

    async fn get_trip(&self, trip_id: TripId) -> Result<Trip, ApiError>;

    async fn create_trip(&self, draft: &TripDraft) -> Result<Trip, ApiError>;

    async fn update_trip(&self, trip_id: TripId, draft: &TripDraft) -> Result<Trip, ApiError>;

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), ApiError>;

    /// Reserve a seat. A `success: false` reply is returned as `Ok`; callers
    /// decide how to surface it.
    async fn book_trip(&self, trip_id: TripId) -> Result<BookingOutcome, ApiError>;

    async fn submit_rating(&self, submission: &RatingSubmission) -> Result<(), ApiError>;
}

/// Account operations: sign-in, registration and the profile.
#[async_trait]
pub trait AccountService: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    async fn fetch_profile(&self) -> Result<User, ApiError>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError>;
}
