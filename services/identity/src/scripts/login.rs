//! Verify that the demo account can sign in

use std::io::Write;

use tracing::{info, warn};

use crate::{models::Credentials, provider::IdentityProvider};

pub const EMAIL: &str = "test@securetrux.com";
pub const PASSWORD: &str = "123456";

/// How the sign-in attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn { uid: String, email_verified: bool },
    Failed { code: String },
}

/// Credentials this script signs in with
pub fn credentials() -> Credentials {
    Credentials::new(EMAIL, PASSWORD)
}

/// Sign in once and print the resulting identity or error to `out`
pub async fn run<P, W>(provider: &P, out: &mut W) -> std::io::Result<LoginOutcome>
where
    P: IdentityProvider,
    W: Write,
{
    let credentials = credentials();

    match provider.sign_in(&credentials).await {
        Ok(identity) => {
            info!("Signed in as {}", identity.uid);
            writeln!(out, "Login successful")?;
            writeln!(out, "Email: {}", identity.email)?;
            writeln!(out, "UID: {}", identity.uid)?;
            writeln!(out, "Email verified: {}", identity.email_verified)?;
            Ok(LoginOutcome::SignedIn {
                uid: identity.uid,
                email_verified: identity.email_verified,
            })
        }
        Err(err) => {
            warn!("Sign-in failed with {}", err.code);
            writeln!(out, "Login failed: {}", err.message)?;
            writeln!(out, "Code: {}", err.code)?;
            Ok(LoginOutcome::Failed { code: err.code })
        }
    }
}
