//! Errors reported by the identity service
//!
//! The service owns the error taxonomy. Codes are carried verbatim in the
//! `auth/<reason>` form; the only code this crate classifies locally is
//! [`EMAIL_ALREADY_IN_USE`].

use serde::Deserialize;
use thiserror::Error;

pub const EMAIL_ALREADY_IN_USE: &str = "auth/email-already-in-use";
pub const NETWORK_REQUEST_FAILED: &str = "auth/network-request-failed";
pub const INTERNAL_ERROR: &str = "auth/internal-error";

/// Failure reported by (or while reaching) the identity service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    /// Provider-defined code, e.g. `auth/email-already-in-use`
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Error envelope returned by the REST API
#[derive(Debug, Deserialize)]
struct RestErrorEnvelope {
    error: RestError,
}

#[derive(Debug, Deserialize)]
struct RestError {
    message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Whether the service refused to create an account that already exists
    pub fn is_account_exists(&self) -> bool {
        self.code == EMAIL_ALREADY_IN_USE
    }

    /// Transport-level failure: connection, TLS or response decoding
    ///
    /// The request URL is stripped since its query carries the API key.
    pub fn network(err: reqwest::Error) -> Self {
        let err = err.without_url();
        Self::new(
            NETWORK_REQUEST_FAILED,
            format!("Firebase: {} ({}).", err, NETWORK_REQUEST_FAILED),
        )
    }

    /// Build an error from a non-success REST response body
    pub fn from_rest_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<RestErrorEnvelope>(body) {
            Ok(envelope) => Self::from_rest_message(&envelope.error.message),
            Err(_) => Self::new(
                INTERNAL_ERROR,
                format!(
                    "Firebase: Unexpected response (HTTP {}) ({}).",
                    status, INTERNAL_ERROR
                ),
            ),
        }
    }

    /// Map a REST reason such as `WEAK_PASSWORD : Password should be at
    /// least 6 characters` to its `auth/*` code and display message
    pub fn from_rest_message(raw: &str) -> Self {
        let (reason, detail) = match raw.split_once(" : ") {
            Some((reason, detail)) => (reason.trim(), Some(detail.trim())),
            None => (raw.trim(), None),
        };

        let code = rest_reason_code(reason);
        let message = match detail {
            Some(detail) if !detail.is_empty() => format!("Firebase: {} ({}).", detail, code),
            _ => format!("Firebase: Error ({}).", code),
        };

        Self::new(code, message)
    }
}

fn rest_reason_code(reason: &str) -> &'static str {
    match reason {
        "EMAIL_EXISTS" => EMAIL_ALREADY_IN_USE,
        "EMAIL_NOT_FOUND" => "auth/user-not-found",
        "INVALID_PASSWORD" => "auth/wrong-password",
        "INVALID_LOGIN_CREDENTIALS" => "auth/invalid-credential",
        "INVALID_EMAIL" => "auth/invalid-email",
        "WEAK_PASSWORD" => "auth/weak-password",
        "USER_DISABLED" => "auth/user-disabled",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "auth/too-many-requests",
        "OPERATION_NOT_ALLOWED" => "auth/operation-not-allowed",
        "API_KEY_INVALID" => "auth/api-key-not-valid",
        other if other.starts_with("API key not valid") => "auth/api-key-not-valid",
        _ => INTERNAL_ERROR,
    }
}
