//! Dashboard: trips the user added or booked, with rating.

mod intent;
mod reducer;
mod state;

pub use intent::DashboardIntent;
pub use reducer::{DashboardReducer, RATING_CONFIRMED};
pub use state::{DashboardBoard, DashboardState};
