//! Client-side checks that run before anything is sent to the backend.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Minimum age for creating an account.
pub const MINIMUM_AGE: i32 = 18;

/// Birthdates are entered as `YYYY-MM-DD`.
pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a rating between 1 and 5 (got {value})")]
    RatingOutOfRange { value: i64 },

    #[error("You must be at least {minimum} years old to register (age {age})")]
    Underage { age: i32, minimum: i32 },

    #[error("Birthdate '{input}' is not a valid YYYY-MM-DD date")]
    InvalidBirthdate { input: String },

    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("'{input}' is not a valid trip id")]
    InvalidTripId { input: String },
}

/// Reject blank form input.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

pub fn parse_birthdate(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), BIRTHDATE_FORMAT).map_err(|_| {
        ValidationError::InvalidBirthdate {
            input: input.to_string(),
        }
    })
}

/// Completed years between `birthdate` and `today`.
///
/// The year only counts once the birthday itself has been reached.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

pub fn ensure_adult(birthdate: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    let age = age_on(birthdate, today);
    if age < MINIMUM_AGE {
        return Err(ValidationError::Underage {
            age,
            minimum: MINIMUM_AGE,
        });
    }
    Ok(())
}
