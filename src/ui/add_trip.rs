//! Form for offering a new trip.

use crate::api::{TripDraft, UserId};
use crate::geocode::{Coordinate, Suggestion, DEFAULT_LOCATION};
use crate::validation::{require, ValidationError};

pub const TRIP_ADDED: &str = "Trip added successfully!";
pub const TRIP_ADD_FAILED: &str = "Failed to add trip. Please try again.";

/// A place typed by the user, pinned once a suggestion is picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationField {
    pub text: String,
    pub coordinate: Option<Coordinate>,
}

impl LocationField {
    pub fn typed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            coordinate: None,
        }
    }

    pub fn apply_suggestion(&mut self, suggestion: &Suggestion) {
        self.text = suggestion.display_name.clone();
        self.coordinate = Some(suggestion.coordinate());
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    pub start: LocationField,
    pub destination: LocationField,
    pub date: String,
    pub time: String,
    pub available_space: u32,
}

impl TripForm {
    /// Build the create/update payload for `driver`.
    ///
    /// The stored coordinate is the start point's, falling back to the
    /// default map center when no suggestion was picked.
    pub fn into_draft(self, driver: Option<UserId>) -> Result<TripDraft, ValidationError> {
        let driver_id = driver.ok_or(ValidationError::MissingField { field: "driver" })?;
        require("start point", &self.start.text)?;
        require("destination", &self.destination.text)?;
        require("date", &self.date)?;
        require("time", &self.time)?;

        let Coordinate { lat, lon } = self.start.coordinate.unwrap_or(DEFAULT_LOCATION);
        Ok(TripDraft {
            driver_id,
            start_point: self.start.text.trim().to_string(),
            destination_point: self.destination.text.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            available_space: self.available_space,
            latitude: lat,
            longitude: lon,
        })
    }
}
