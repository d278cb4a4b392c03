use crate::ui::mvi::Reducer;
use crate::ui::rating::intent::RatingIntent;
use crate::ui::rating::state::RatingDialogState;

pub struct RatingReducer;

impl Reducer for RatingReducer {
    type State = RatingDialogState;
    type Intent = RatingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RatingIntent::Open { trip_id, target } => RatingDialogState::Open {
                trip_id,
                target,
                selected: None,
            },
            RatingIntent::Select(value) => match state {
                RatingDialogState::Open {
                    trip_id, target, ..
                } => RatingDialogState::Open {
                    trip_id,
                    target,
                    selected: Some(value),
                },
                hidden => hidden,
            },
            RatingIntent::Close => RatingDialogState::Hidden,
        }
    }
}
