//! Landing page quick search and the tracking placeholder.

use crate::api::Trip;
use crate::filter::matches_query;

pub const WELCOME_TITLE: &str = "Welcome to MyCargonaut";
pub const WELCOME_SUBTITLE: &str =
    "Find or offer rides and freight-sharing solutions quickly and effortlessly.";
pub const TRACKING_TITLE: &str = "Track Your Ride/Freight";
pub const TRACKING_PLACEHOLDER: &str = "Real-time tracking coming soon...";

/// From/to/date quick search. Blank fields match anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingSearch {
    pub from: String,
    pub to: String,
    pub date: String,
}

impl LandingSearch {
    pub fn matches(&self, trip: &Trip) -> bool {
        matches_query(&trip.start_point, self.from.trim())
            && matches_query(&trip.destination_point, self.to.trim())
            && matches_query(&trip.date, self.date.trim())
    }

    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        trips.iter().filter(|trip| self.matches(trip)).collect()
    }
}

pub fn call_to_action(signed_in: bool) -> &'static str {
    if signed_in {
        "Go to Profile"
    } else {
        "Get Started"
    }
}
