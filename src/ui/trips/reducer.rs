use crate::filter::unique_destinations;
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::trips::intent::TripBrowserIntent;
use crate::ui::trips::state::{TripBoard, TripBrowserState};

pub const BOOKING_CONFIRMED: &str = "Trip booked successfully!";

pub struct TripBrowserReducer;

impl Reducer for TripBrowserReducer {
    type State = TripBrowserState;
    type Intent = TripBrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TripBrowserIntent::Loaded { trips } => {
                let plain: Vec<_> = trips.iter().map(|view| view.trip.clone()).collect();
                // A reload keeps whatever the user typed into the filters.
                let (trip_filter, destination_filter) = match state {
                    TripBrowserState::Ready(board) => (board.trip_filter, board.destination_filter),
                    _ => (String::new(), String::new()),
                };
                TripBrowserState::Ready(TripBoard {
                    destinations: unique_destinations(&plain),
                    trips,
                    trip_filter,
                    destination_filter,
                    notice: None,
                })
            }
            TripBrowserIntent::LoadFailed { message } => TripBrowserState::Failed { message },
            TripBrowserIntent::TripFilterChanged(query) => update_board(state, |board| {
                board.trip_filter = query;
            }),
            TripBrowserIntent::DestinationFilterChanged(query) => update_board(state, |board| {
                board.destination_filter = query;
            }),
            TripBrowserIntent::BookingSucceeded { trip_id } => update_board(state, |board| {
                if let Some(view) = board.trips.iter_mut().find(|v| v.trip.id == trip_id) {
                    view.trip.available_space = view.trip.available_space.saturating_sub(1);
                }
                board.notice = Some(Notice::success(BOOKING_CONFIRMED));
            }),
            TripBrowserIntent::BookingRejected { message }
            | TripBrowserIntent::BookingFailed { message } => update_board(state, |board| {
                board.notice = Some(Notice::error(message));
            }),
            TripBrowserIntent::DismissNotice => update_board(state, |board| {
                board.notice = None;
            }),
        }
    }
}

/// Apply `f` to a loaded board; other states pass through unchanged.
fn update_board<F>(state: TripBrowserState, f: F) -> TripBrowserState
where
    F: FnOnce(&mut TripBoard),
{
    match state {
        TripBrowserState::Ready(mut board) => {
            f(&mut board);
            TripBrowserState::Ready(board)
        }
        other => other,
    }
}
