//! Sign-up form.

use chrono::NaiveDate;

use crate::api::Credentials;
use crate::validation::{ensure_adult, parse_birthdate, require, ValidationError};

pub const REGISTERED: &str = "Registration successful!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    /// `YYYY-MM-DD`; only checked locally, never sent.
    pub birthdate: String,
}

impl RegistrationForm {
    /// Check the form as of `today` and produce the request body.
    pub fn validate(&self, today: NaiveDate) -> Result<Credentials, ValidationError> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        let birthdate = parse_birthdate(&self.birthdate)?;
        ensure_adult(birthdate, today)?;

        Ok(Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(birthdate: &str) -> RegistrationForm {
        RegistrationForm {
            email: " new@cargonaut.de ".to_string(),
            password: "hunter2".to_string(),
            birthdate: birthdate.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn adult_passes() {
        let credentials = form("2008-10-19").validate(today()).unwrap();
        assert_eq!(credentials.email, "new@cargonaut.de");
    }

    #[test]
    fn one_day_short_of_eighteen_fails() {
        assert_eq!(
            form("2008-10-20").validate(today()).unwrap_err(),
            ValidationError::Underage {
                age: 17,
                minimum: 18
            }
        );
    }

    #[test]
    fn blank_password_fails_first() {
        let mut f = form("not a date");
        f.password.clear();
        assert_eq!(
            f.validate(today()).unwrap_err(),
            ValidationError::MissingField { field: "password" }
        );
    }

    #[test]
    fn garbage_birthdate_fails() {
        assert!(matches!(
            form("19.10.2000").validate(today()),
            Err(ValidationError::InvalidBirthdate { .. })
        ));
    }
}
