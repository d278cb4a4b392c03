//! Login, registration and profile flows through the session actor.

mod common;

use chrono::NaiveDate;

use cargonaut::api::{ApiError, UserId};
use cargonaut::app::Account;
use cargonaut::ui::register::RegistrationForm;
use cargonaut::validation::ValidationError;
use common::mock_backend::{MockBackend, MockResponse};
use common::{client, signed_in, signed_out};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn login_stores_session_and_later_requests_use_token() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(r#"{"token": "fresh", "user": {"id": 8, "email": "d@c.de"}}"#)
        .await;
    mock.enqueue_json(r#"{"id": 8, "email": "d@c.de", "name": "Dana"}"#)
        .await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session.clone());

    let user = account.login("d@c.de", "secret").await.unwrap();
    assert_eq!(user.id, UserId(8));
    assert_eq!(session.token().unwrap().expose(), "fresh");

    let refreshed = account.refresh_user().await.unwrap();
    assert_eq!(refreshed.name.as_deref(), Some("Dana"));
    assert_eq!(session.user().unwrap().name.as_deref(), Some("Dana"));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(requests[1].header("authorization"), Some("Bearer fresh"));
}

#[tokio::test]
async fn failed_login_leaves_session_empty() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(401, "Invalid credentials"))
        .await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session.clone());

    let err = account.login("d@c.de", "wrong").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn blank_credentials_are_rejected_locally() {
    let mock = MockBackend::start().await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session);

    let err = account.login("", "pw").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::MissingField { field: "email" })
    ));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn underage_registration_never_reaches_backend() {
    let mock = MockBackend::start().await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session);

    let form = RegistrationForm {
        email: "kid@c.de".to_string(),
        password: "pw".to_string(),
        birthdate: "2010-01-01".to_string(),
    };
    let err = account.register(&form, today()).await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Validation(ValidationError::Underage { age: 16, .. })
    ));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn registration_posts_only_email_and_password() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(r#"{"id": 10}"#).await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session.clone());

    let form = RegistrationForm {
        email: "new@c.de".to_string(),
        password: "pw".to_string(),
        birthdate: "1990-05-05".to_string(),
    };
    account.register(&form, today()).await.unwrap();

    let request = &mock.captured_requests().await[0];
    assert_eq!(request.path, "/api/register");
    assert_eq!(
        request.json(),
        serde_json::json!({"email": "new@c.de", "password": "pw"})
    );
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn profile_update_saves_then_refreshes_session() {
    let mock = MockBackend::start().await;
    mock.enqueue_json(r#"{"id": 1, "email": "user1@cargonaut.de", "name": "User 1"}"#)
        .await;
    mock.enqueue_response(MockResponse::no_content()).await;
    mock.enqueue_json(
        r#"{"id": 1, "email": "user1@cargonaut.de", "name": "Neu", "phone": "0641"}"#,
    )
    .await;
    let session = signed_in(1).await;
    let account = Account::new(client(&mock, session.clone()), session.clone());

    let mut form = account.load_profile().await.unwrap();
    assert_eq!(form.name, "User 1");
    form.name = "Neu".to_string();
    form.phone = "0641".to_string();

    let user = account.update_profile(&form).await.unwrap();
    assert_eq!(user.phone.as_deref(), Some("0641"));
    assert_eq!(session.user().unwrap().name.as_deref(), Some("Neu"));

    let methods: Vec<_> = mock
        .captured_requests()
        .await
        .iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        methods,
        vec!["GET /api/profile", "PUT /api/profile", "GET /api/profile"]
    );
}

#[tokio::test]
async fn profile_requires_sign_in() {
    let mock = MockBackend::start().await;
    let session = signed_out();
    let account = Account::new(client(&mock, session.clone()), session);

    assert!(matches!(
        account.load_profile().await,
        Err(ApiError::NotAuthenticated)
    ));
    assert!(matches!(account.require_user(), Err(ApiError::NotAuthenticated)));
}

#[tokio::test]
async fn logout_clears_session() {
    let mock = MockBackend::start().await;
    let session = signed_in(1).await;
    let account = Account::new(client(&mock, session.clone()), session.clone());

    account.logout().await.unwrap();
    assert!(session.current().is_none());
}
