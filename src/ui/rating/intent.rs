use crate::api::{TripId, UserId};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingIntent {
    Open { trip_id: TripId, target: UserId },
    Select(i64),
    Close,
}

impl Intent for RatingIntent {}
