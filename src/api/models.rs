//! Wire schemas for the MyCargonaut backend.
//!
//! Every response is decoded into these types at the API boundary; anything
//! that does not fit is reported as a malformed response rather than passed on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rating::RatingValue;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse()
            .map(TripId)
            .map_err(|_| ValidationError::InvalidTripId {
                input: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Planned,
    Ongoing,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A rider's reservation against a trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub user_id: UserId,
}

/// A driver-offered ride/freight slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    pub driver_id: UserId,
    pub start_point: String,
    pub destination_point: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub available_space: u32,
    #[serde(default)]
    pub driver_rating: Option<f64>,
    #[serde(default)]
    pub booked_users: Vec<Booking>,
    #[serde(default)]
    pub status: Option<TripStatus>,
}

impl Trip {
    pub fn is_driven_by(&self, user: UserId) -> bool {
        self.driver_id == user
    }

    pub fn is_booked_by(&self, user: UserId) -> bool {
        self.booked_users.iter().any(|b| b.user_id == user)
    }

    pub fn is_ongoing(&self) -> bool {
        self.status == Some(TripStatus::Ongoing)
    }

    /// "Start → Destination" as shown on trip cards.
    pub fn route(&self) -> String {
        format!("{} → {}", self.start_point, self.destination_point)
    }
}

/// Payload for creating or updating a trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDraft {
    pub driver_id: UserId,
    pub start_point: String,
    pub destination_point: String,
    pub date: String,
    pub time: String,
    pub available_space: u32,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl User {
    /// Name if the user set one, email otherwise.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Body of `/login` and `/register`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"••••••••")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Reply of the booking endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission {
    pub voter_id: UserId,
    pub user_id: UserId,
    pub trip_id: TripId,
    pub rating_value: RatingValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_decodes_backend_shape() {
        let json = r#"{
            "id": 7,
            "driverId": 2,
            "startPoint": "Gießen",
            "destinationPoint": "Berlin",
            "date": "2026-11-02",
            "time": "08:30",
            "availableSpace": 3,
            "driverRating": 4.5,
            "bookedUsers": [{"userId": 9}],
            "status": "ONGOING"
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, TripId(7));
        assert!(trip.is_driven_by(UserId(2)));
        assert!(trip.is_booked_by(UserId(9)));
        assert!(trip.is_ongoing());
        assert_eq!(trip.route(), "Gießen → Berlin");
    }

    #[test]
    fn optional_trip_fields_default() {
        let json = r#"{"id": 1, "driverId": 2, "startPoint": "A", "destinationPoint": "B"}"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.available_space, 0);
        assert!(trip.booked_users.is_empty());
        assert!(trip.driver_rating.is_none());
        assert!(trip.status.is_none());
    }

    #[test]
    fn unknown_status_is_tolerated() {
        let status: TripStatus = serde_json::from_str("\"DELAYED\"").unwrap();
        assert_eq!(status, TripStatus::Unknown);
    }

    #[test]
    fn trip_id_parsing() {
        assert_eq!("42".parse::<TripId>().unwrap(), TripId(42));
        assert!("abc".parse::<TripId>().is_err());
    }

    #[test]
    fn rating_submission_uses_camel_case() {
        let submission = RatingSubmission {
            voter_id: UserId(1),
            user_id: UserId(2),
            trip_id: TripId(3),
            rating_value: RatingValue::new(4).unwrap(),
        };
        let value = serde_json::to_value(submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"voterId": 1, "userId": 2, "tripId": 3, "ratingValue": 4})
        );
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials {
            email: "a@b.de".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut user = User {
            id: UserId(1),
            email: "max@cargonaut.de".to_string(),
            name: None,
            phone: None,
            roles: vec![],
        };
        assert_eq!(user.display_name(), "max@cargonaut.de");
        user.name = Some("Max".to_string());
        assert_eq!(user.display_name(), "Max");
    }
}
