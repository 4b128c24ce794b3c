//! Seam between the scripts and the identity service

use std::future::Future;

use crate::{
    error::ProviderError,
    models::{AuthResult, Credentials},
};

/// Account operations offered by an identity service
pub trait IdentityProvider {
    /// Create a new email/password account
    fn create_account(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResult, ProviderError>> + Send;

    /// Authenticate an existing email/password account
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<AuthResult, ProviderError>> + Send;
}
