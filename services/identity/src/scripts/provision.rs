//! Create the demo account on the identity service

use std::io::Write;

use tracing::{info, warn};

use crate::{models::Credentials, provider::IdentityProvider};

pub const EMAIL: &str = "nuevo@email.com";
pub const PASSWORD: &str = "123456";

/// How the provisioning attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created { uid: String },
    AlreadyExists,
    Failed { code: String },
}

/// Credentials of the account this script provisions
pub fn credentials() -> Credentials {
    Credentials::new(EMAIL, PASSWORD)
}

/// Create the account and print the result to `out`
///
/// Provider failures are rendered, never returned; only a failure to write
/// the report surfaces as an error.
pub async fn run<P, W>(provider: &P, out: &mut W) -> std::io::Result<ProvisionOutcome>
where
    P: IdentityProvider,
    W: Write,
{
    let credentials = credentials();

    match provider.create_account(&credentials).await {
        Ok(account) => {
            info!("Account {} created", account.uid);
            writeln!(out, "User created successfully")?;
            writeln!(out, "Email: {}", account.email)?;
            writeln!(out, "UID: {}", account.uid)?;
            Ok(ProvisionOutcome::Created { uid: account.uid })
        }
        Err(err) if err.is_account_exists() => {
            info!("Account {} already exists", credentials.email);
            writeln!(
                out,
                "The account {} already exists; nothing to create",
                credentials.email
            )?;
            Ok(ProvisionOutcome::AlreadyExists)
        }
        Err(err) => {
            warn!("Account creation failed with {}", err.code);
            writeln!(out, "Error creating user: {}", err.message)?;
            Ok(ProvisionOutcome::Failed { code: err.code })
        }
    }
}
