//! Integration tests for the identity service client
//!
//! A wiremock server stands in for the Identity Toolkit REST API so the
//! scripts can be exercised end to end through the real HTTP client.

use common::IdentityConfig;
use identity::{
    FirebaseAuthClient, IdentityProvider,
    scripts::{
        login::{self, LoginOutcome},
        provision::{self, ProvisionOutcome},
    },
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

const API_KEY: &str = "test-api-key";

fn client_for(server: &MockServer) -> FirebaseAuthClient {
    let config = IdentityConfig::with_base_url(API_KEY, server.uri());
    FirebaseAuthClient::new(config).expect("Failed to build client")
}

fn rest_error(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "invalid" }]
        }
    }))
}

#[tokio::test]
async fn test_provisioning_creates_account() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .and(body_json(json!({
            "email": "nuevo@email.com",
            "password": "123456",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#SignupNewUserResponse",
            "idToken": "id-token",
            "email": "nuevo@email.com",
            "refreshToken": "refresh-token",
            "expiresIn": "3600",
            "localId": "Xy7pQ2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut buffer = Vec::new();
    let outcome = provision::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(
        outcome,
        ProvisionOutcome::Created {
            uid: "Xy7pQ2".to_string()
        }
    );
    assert!(text.contains("Email: nuevo@email.com"));
    assert!(text.contains("UID: Xy7pQ2"));
}

#[tokio::test]
async fn test_provisioning_existing_account_is_benign() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(rest_error("EMAIL_EXISTS"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut buffer = Vec::new();
    let outcome = provision::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(outcome, ProvisionOutcome::AlreadyExists);
    assert!(text.contains("already exists"));
}

#[tokio::test]
async fn test_login_reads_verification_flag() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#VerifyPasswordResponse",
            "localId": "kF3c9QzL",
            "email": "test@securetrux.com",
            "displayName": "",
            "idToken": "session-token",
            "registered": true,
            "refreshToken": "refresh-token",
            "expiresIn": "3600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .and(body_json(json!({ "idToken": "session-token" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "identitytoolkit#GetAccountInfoResponse",
            "users": [{
                "localId": "kF3c9QzL",
                "email": "test@securetrux.com",
                "emailVerified": true
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut buffer = Vec::new();
    let outcome = login::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::SignedIn {
            uid: "kF3c9QzL".to_string(),
            email_verified: true
        }
    );
    assert!(text.contains("Email: test@securetrux.com"));
    assert!(text.contains("UID: kF3c9QzL"));
    assert!(text.contains("Email verified: true"));
}

#[tokio::test]
async fn test_login_failure_reports_message_and_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(rest_error("INVALID_LOGIN_CREDENTIALS"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut buffer = Vec::new();
    let outcome = login::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Failed {
            code: "auth/invalid-credential".to_string()
        }
    );
    assert!(text.contains("Login failed: Firebase: Error (auth/invalid-credential)."));
    assert!(text.contains("Code: auth/invalid-credential"));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let config = IdentityConfig::with_base_url(API_KEY, "http://127.0.0.1:1");
    let client = FirebaseAuthClient::new(config).expect("Failed to build client");

    let err = client
        .sign_in(&login::credentials())
        .await
        .expect_err("sign-in against a stopped server must fail");

    assert_eq!(err.code, "auth/network-request-failed");
}

#[tokio::test]
async fn test_network_failure_report_hides_api_key() {
    let config = IdentityConfig::with_base_url("SECRET-KEY-XYZ", "http://127.0.0.1:1");
    let client = FirebaseAuthClient::new(config).expect("Failed to build client");

    let mut buffer = Vec::new();
    let outcome = login::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(
        outcome,
        LoginOutcome::Failed {
            code: "auth/network-request-failed".to_string()
        }
    );
    assert!(text.contains("Code: auth/network-request-failed"));
    assert!(!text.contains("SECRET-KEY-XYZ"));

    let mut buffer = Vec::new();
    provision::run(&client, &mut buffer).await.unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("Error creating user"));
    assert!(!text.contains("SECRET-KEY-XYZ"));
}
