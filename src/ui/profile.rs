//! Profile editor. Email is shown but not editable.

use crate::api::{ProfileUpdate, User};

pub const PROFILE_SAVED: &str = "Profile updated successfully.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
        }
    }

    /// Body for the save call. A blank phone is left out.
    pub fn to_update(&self) -> ProfileUpdate {
        let phone = self.phone.trim();
        ProfileUpdate {
            name: self.name.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }
}
