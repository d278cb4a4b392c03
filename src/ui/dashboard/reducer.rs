use crate::filter::{added_by, booked_by};
use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::{DashboardBoard, DashboardState};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;
use crate::ui::rating::{RatingDialogState, RatingReducer};

pub const RATING_CONFIRMED: &str = "Rating submitted successfully.";

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Loaded { trips, user } => {
                // Keep a success notice from the submit that triggered this reload.
                let notice = match state {
                    DashboardState::Ready(board) => board.notice,
                    _ => None,
                };
                DashboardState::Ready(DashboardBoard {
                    added: added_by(&trips, user.id),
                    booked: booked_by(&trips, user.id),
                    user: Some(user),
                    rating: RatingDialogState::Hidden,
                    notice,
                })
            }
            DashboardIntent::LoadFailed { message } => DashboardState::Failed { message },
            DashboardIntent::Rating(intent) => update_board(state, |board| {
                let dialog = std::mem::take(&mut board.rating);
                board.rating = RatingReducer::reduce(dialog, intent);
            }),
            DashboardIntent::RatingSubmitted => update_board(state, |board| {
                board.rating = RatingDialogState::Hidden;
                board.notice = Some(Notice::success(RATING_CONFIRMED));
            }),
            // The dialog stays open so the user can retry.
            DashboardIntent::RatingFailed { message } => update_board(state, |board| {
                board.notice = Some(Notice::error(message));
            }),
            DashboardIntent::DismissNotice => update_board(state, |board| {
                board.notice = None;
            }),
        }
    }
}

fn update_board<F>(state: DashboardState, f: F) -> DashboardState
where
    F: FnOnce(&mut DashboardBoard),
{
    match state {
        DashboardState::Ready(mut board) => {
            f(&mut board);
            DashboardState::Ready(board)
        }
        other => other,
    }
}
