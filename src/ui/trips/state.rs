use rand::Rng;

use crate::api::{Trip, TripId};
use crate::filter::filter_by;
use crate::rating::StarBreakdown;
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// A trip as the browser shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct TripView {
    pub trip: Trip,
    /// Cosmetic 0..100 progress for ongoing trips; never sent anywhere.
    pub progress: u8,
}

impl TripView {
    pub fn new<R: Rng + ?Sized>(trip: Trip, rng: &mut R) -> Self {
        let progress = if trip.is_ongoing() {
            rng.random_range(0..100)
        } else {
            0
        };
        Self { trip, progress }
    }

    /// Driver rating as stars; trips without a rating show all empty.
    pub fn stars(&self, max_stars: u32) -> StarBreakdown {
        StarBreakdown::compute(self.trip.driver_rating.unwrap_or(0.0), max_stars)
    }
}

/// Loaded content of the trip browser.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripBoard {
    pub trips: Vec<TripView>,
    /// Distinct destinations ("Deliveries"), first-seen order.
    pub destinations: Vec<String>,
    /// Matched against each trip's start point.
    pub trip_filter: String,
    pub destination_filter: String,
    pub notice: Option<Notice>,
}

impl TripBoard {
    pub fn visible_trips(&self) -> Vec<&TripView> {
        filter_by(&self.trips, &self.trip_filter, |view| {
            view.trip.start_point.as_str()
        })
    }

    pub fn visible_destinations(&self) -> Vec<&String> {
        filter_by(&self.destinations, &self.destination_filter, |d| d.as_str())
    }

    pub fn find(&self, trip_id: TripId) -> Option<&TripView> {
        self.trips.iter().find(|view| view.trip.id == trip_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TripBrowserState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready(TripBoard),
}

impl UiState for TripBrowserState {}

impl TripBrowserState {
    pub fn board(&self) -> Option<&TripBoard> {
        match self {
            Self::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn available_space(&self, trip_id: TripId) -> Option<u32> {
        self.board()
            .and_then(|board| board.find(trip_id))
            .map(|view| view.trip.available_space)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.board().and_then(|board| board.notice.as_ref())
    }
}
