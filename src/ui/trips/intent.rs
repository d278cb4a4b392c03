use crate::api::TripId;
use crate::ui::mvi::Intent;
use crate::ui::trips::state::TripView;

#[derive(Debug, Clone)]
pub enum TripBrowserIntent {
    /// Trip list fetched from the backend.
    Loaded { trips: Vec<TripView> },
    LoadFailed { message: String },
    TripFilterChanged(String),
    DestinationFilterChanged(String),
    /// Backend confirmed the booking; one seat fewer on that trip.
    BookingSucceeded { trip_id: TripId },
    /// Backend answered but declined the booking.
    BookingRejected { message: String },
    /// The booking call itself failed.
    BookingFailed { message: String },
    DismissNotice,
}

impl Intent for TripBrowserIntent {}
