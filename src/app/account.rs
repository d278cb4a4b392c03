use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::{AccountService, ApiError, Credentials, User};
use crate::config::SecureString;
use crate::session::{Session, SessionClient};
use crate::ui::profile::ProfileForm;
use crate::ui::register::RegistrationForm;
use crate::validation::require;

/// Notice title for failed sign-ins.
pub const LOGIN_FAILED_TITLE: &str = "Login Failed";

/// Sign-in, registration and profile flows.
pub struct Account {
    service: Arc<dyn AccountService>,
    session: SessionClient,
}

impl Account {
    pub fn new(service: Arc<dyn AccountService>, session: SessionClient) -> Self {
        Self { service, session }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        require("email", email)?;
        require("password", password)?;

        let credentials = Credentials {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let response = self.service.login(&credentials).await?;
        self.session
            .sign_in(Session {
                token: SecureString::new(response.token),
                user: response.user.clone(),
            })
            .await?;
        Ok(response.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.session.sign_out().await?;
        Ok(())
    }

    /// Validate locally as of `today`, then create the account. Does not sign
    /// in.
    pub async fn register(&self, form: &RegistrationForm, today: NaiveDate) -> Result<(), ApiError> {
        let credentials = form.validate(today)?;
        self.service.register(&credentials).await?;
        tracing::info!(email = %credentials.email, "Registered");
        Ok(())
    }

    /// Re-fetch the signed-in user and publish it to the session.
    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        self.require_user()?;
        let user = self.service.fetch_profile().await?;
        self.session.replace_user(user.clone()).await?;
        Ok(user)
    }

    pub async fn load_profile(&self) -> Result<ProfileForm, ApiError> {
        self.require_user()?;
        let user = self.service.fetch_profile().await?;
        Ok(ProfileForm::from_user(&user))
    }

    pub async fn update_profile(&self, form: &ProfileForm) -> Result<User, ApiError> {
        self.require_user()?;
        self.service.update_profile(&form.to_update()).await?;
        self.refresh_user().await
    }

    /// The signed-in user, or `NotAuthenticated`.
    pub fn require_user(&self) -> Result<User, ApiError> {
        self.session.user().ok_or(ApiError::NotAuthenticated)
    }
}
