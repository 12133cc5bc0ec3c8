//! `HttpAuthService` against a mock backend, and the login form driving it.

use std::sync::Arc;

use chatdesk_business::test_utils::{RecordingNavigator, RecordingNotifier};
use chatdesk_business::{
    AuthError, AuthService, AuthStatus, BusinessConfig, Credentials, HttpAuthService, LoginError,
    LoginFormController, Navigator, Notifier, Toast,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HttpAuthService) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mock_server = MockServer::start().await;
    let service = HttpAuthService::new(BusinessConfig::new(mock_server.uri()));
    (mock_server, service)
}

#[tokio::test]
async fn test_login_posts_credentials_and_authenticates() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "testuser",
            "password": "testpass",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "username": "testuser"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = service
        .login(&Credentials::new("testuser", "testpass"))
        .await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        service.status(),
        AuthStatus::Authenticated {
            username: "testuser".to_owned()
        }
    );
}

#[tokio::test]
async fn test_login_sends_whitespace_untouched() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({
            "username": "  testuser  ",
            "password": "  testpass  ",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = service
        .login(&Credentials::new("  testuser  ", "  testpass  "))
        .await;

    assert_eq!(result, Ok(()));
    assert_eq!(
        service.status().username(),
        Some("  testuser  "),
        "empty body falls back to the submitted username"
    );
}

#[tokio::test]
async fn test_unauthorized_uses_server_message() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Account locked"
        })))
        .mount(&mock_server)
        .await;

    let result = service
        .login(&Credentials::new("wronguser", "wrongpass"))
        .await;

    assert_eq!(result, Err(AuthError::new("Account locked")));
    assert_eq!(service.status(), AuthStatus::NotAuthenticated);
}

#[tokio::test]
async fn test_unauthorized_without_body_uses_default_message() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = service
        .login(&Credentials::new("wronguser", "wrongpass"))
        .await;

    assert_eq!(result, Err(AuthError::new("Invalid credentials")));
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = service
        .login(&Credentials::new("testuser", "testpass"))
        .await;

    assert_eq!(result, Err(AuthError::new("Server error (status 503)")));
}

#[tokio::test]
async fn test_network_error_is_reported() {
    // Nothing listens on the discard port.
    let service = HttpAuthService::new(BusinessConfig::new("http://127.0.0.1:9"));

    let err = service
        .login(&Credentials::new("testuser", "testpass"))
        .await
        .expect_err("connection should fail");

    assert!(
        err.message().starts_with("Network error:"),
        "unexpected message: {err}"
    );
    assert_eq!(service.status(), AuthStatus::NotAuthenticated);
}

#[tokio::test]
async fn test_logout_clears_status() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    service
        .login(&Credentials::new("testuser", "testpass"))
        .await
        .expect("login should succeed");
    assert!(service.status().is_authenticated());

    service.logout();
    assert_eq!(service.status(), AuthStatus::NotAuthenticated);
}

#[tokio::test]
async fn test_controller_passes_backend_message_to_toast() {
    let (mock_server, service) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Invalid credentials"
        })))
        .mount(&mock_server)
        .await;

    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let controller = LoginFormController::new(
        Arc::new(service),
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::clone(&navigator) as Arc<dyn Navigator>,
    );

    let result = controller
        .submit(Credentials::new("wronguser", "wrongpass"))
        .await;

    assert_eq!(
        result,
        Err(LoginError::Authentication(AuthError::new(
            "Invalid credentials"
        )))
    );
    assert_eq!(
        notifier.toasts(),
        vec![Toast::destructive("Login failed", "Invalid credentials")]
    );
    assert!(navigator.paths().is_empty(), "failed login must not navigate");
}
