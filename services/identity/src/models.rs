//! Identity service models

/// Email/password pair submitted to the identity service
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Identity returned by the service after sign-up or sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResult {
    /// Opaque user identifier assigned by the service
    pub uid: String,
    pub email: String,
    /// Whether the service considers the email confirmed
    pub email_verified: bool,
}
