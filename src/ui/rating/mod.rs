//! Star-rating dialog shown from the dashboard.

mod intent;
mod reducer;
mod state;

pub use intent::RatingIntent;
pub use reducer::RatingReducer;
pub use state::RatingDialogState;
