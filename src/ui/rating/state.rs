use crate::api::{RatingSubmission, TripId, UserId};
use crate::rating::RatingValue;
use crate::ui::mvi::UiState;
use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RatingDialogState {
    #[default]
    Hidden,
    Open {
        trip_id: TripId,
        /// The user being rated.
        target: UserId,
        /// Raw star selection; checked only on submit.
        selected: Option<i64>,
    },
}

impl UiState for RatingDialogState {}

impl RatingDialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Build the payload for the current selection.
    ///
    /// Fails with `RatingOutOfRange` when nothing or an invalid value is
    /// selected, and with `MissingField` when the dialog is closed.
    pub fn submission(&self, voter: UserId) -> Result<RatingSubmission, ValidationError> {
        match self {
            Self::Hidden => Err(ValidationError::MissingField { field: "trip" }),
            Self::Open {
                trip_id,
                target,
                selected,
            } => {
                let rating_value = RatingValue::new(selected.unwrap_or(0))?;
                Ok(RatingSubmission {
                    voter_id: voter,
                    user_id: *target,
                    trip_id: *trip_id,
                    rating_value,
                })
            }
        }
    }
}
