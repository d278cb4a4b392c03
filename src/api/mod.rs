//! REST client layer: typed models, errors, retry policy and the client itself.

mod client;
mod error;
pub mod models;
mod retry;
mod service;

pub(crate) use client::{decode, transport};

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Booking, BookingOutcome, Credentials, LoginResponse, ProfileUpdate, RatingSubmission, Trip,
    TripDraft, TripId, TripStatus, User, UserId,
};
pub use retry::RetryPolicy;
pub use service::{AccountService, TripService};
