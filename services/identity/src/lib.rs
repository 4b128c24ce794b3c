//! Identity service tooling for ProtecTrux
//!
//! Provides a client for the external identity service, the provider seam it
//! implements, and the account provisioning and login verification scripts
//! run by the `create-user` and `test-login` binaries.

pub mod client;
pub mod error;
pub mod models;
pub mod provider;
pub mod scripts;
pub mod telemetry;

pub use client::FirebaseAuthClient;
pub use error::ProviderError;
pub use models::{AuthResult, Credentials};
pub use provider::IdentityProvider;

use anyhow::{Context, Result};
use common::IdentityConfig;

/// Load the identity configuration and build a client from it
pub fn connect() -> Result<FirebaseAuthClient> {
    let config = IdentityConfig::from_env().context("Failed to load identity configuration")?;
    let client = FirebaseAuthClient::new(config).context("Failed to build HTTP client")?;
    Ok(client)
}
