use crate::api::{Trip, User};
use crate::ui::mvi::Intent;
use crate::ui::rating::RatingIntent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// Full trip list plus the user it is partitioned for.
    Loaded { trips: Vec<Trip>, user: User },
    LoadFailed { message: String },
    /// Forwarded to the rating dialog.
    Rating(RatingIntent),
    RatingSubmitted,
    RatingFailed { message: String },
    DismissNotice,
}

impl Intent for DashboardIntent {}
