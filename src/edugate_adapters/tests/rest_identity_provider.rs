use edugate_adapters::RestIdentityProvider;
use edugate_adapters::config::{IdentitySetting, test};
use edugate_core::{
    AuthenticatedUser, Email, IdentityProvider, IdentityProviderError, Password,
};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> RestIdentityProvider {
    let setting = IdentitySetting {
        base_url: server.uri(),
        api_key: Secret::new("test-key".to_string()),
        timeout_in_millis: test::identity::TIMEOUT_IN_MILLIS,
    };
    RestIdentityProvider::from_setting(&setting).unwrap()
}

fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

fn password(raw: &str) -> Password {
    Password::try_from(Secret::new(raw.to_string())).unwrap()
}

#[tokio::test]
async fn authenticate_parses_the_provider_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "email": "student@university.edu",
            "password": "right",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "student@university.edu",
            "emailVerified": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let user = provider
        .authenticate(&email("student@university.edu"), &password("right"))
        .await
        .unwrap();

    assert_eq!(user.email(), &email("student@university.edu"));
    assert!(user.is_verified());
}

#[tokio::test]
async fn authenticate_defaults_to_unverified_when_flag_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "student@university.edu",
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let user = provider
        .authenticate(&email("student@university.edu"), &password("right"))
        .await
        .unwrap();

    assert!(!user.is_verified());
}

#[tokio::test]
async fn authenticate_surfaces_the_provider_error_message_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "INVALID_PASSWORD" },
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let result = provider
        .authenticate(&email("student@university.edu"), &password("wrong"))
        .await;

    assert_eq!(
        result.unwrap_err(),
        IdentityProviderError::CredentialsRejected("INVALID_PASSWORD".to_string())
    );
}

#[tokio::test]
async fn send_verification_email_posts_an_oob_code_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "requestType": "VERIFY_EMAIL",
            "email": "student@university.edu",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "student@university.edu",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let user = AuthenticatedUser::new(email("student@university.edu"), false);

    provider.send_verification_email(&user).await.unwrap();
}

#[tokio::test]
async fn dispatch_failure_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "message": "quota-exceeded" },
        })))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let user = AuthenticatedUser::new(email("student@university.edu"), false);

    let result = provider.send_verification_email(&user).await;
    assert_eq!(
        result.unwrap_err(),
        IdentityProviderError::DispatchFailed("quota-exceeded".to_string())
    );
}
