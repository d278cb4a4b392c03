use crate::api::{Trip, User};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;
use crate::ui::rating::RatingDialogState;

/// The signed-in user's trips, split by role.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardBoard {
    pub user: Option<User>,
    /// Trips the user drives.
    pub added: Vec<Trip>,
    /// Trips the user has a seat on.
    pub booked: Vec<Trip>,
    pub rating: RatingDialogState,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready(DashboardBoard),
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn board(&self) -> Option<&DashboardBoard> {
        match self {
            Self::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn rating(&self) -> Option<&RatingDialogState> {
        self.board().map(|board| &board.rating)
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.board().and_then(|board| board.notice.as_ref())
    }
}
