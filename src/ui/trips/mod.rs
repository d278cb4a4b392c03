//! Trip browser: destination list, trip list, filters and booking.

mod intent;
mod reducer;
mod state;

pub use intent::TripBrowserIntent;
pub use reducer::{TripBrowserReducer, BOOKING_CONFIRMED};
pub use state::{TripBoard, TripBrowserState, TripView};
