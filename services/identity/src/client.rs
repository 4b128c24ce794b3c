//! Firebase Authentication client over the Identity Toolkit REST API

use common::IdentityConfig;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{error, info};

use crate::{
    error::{INTERNAL_ERROR, ProviderError},
    models::{AuthResult, Credentials},
    provider::IdentityProvider,
};

/// Request body for `accounts:signUp` and `accounts:signInWithPassword`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Response of `accounts:signUp` and `accounts:signInWithPassword`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PasswordResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    id_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    #[serde(default)]
    email_verified: bool,
}

/// Identity service client
#[derive(Clone)]
pub struct FirebaseAuthClient {
    http: Client,
    config: IdentityConfig,
}

impl FirebaseAuthClient {
    /// Create a new client for the configured project
    pub fn new(config: IdentityConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("protectrux-identity/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "Identity client initialized for project {} at {}",
            config.project_id, config.api_base_url
        );

        Ok(Self { http, config })
    }

    async fn post<B, R>(&self, method: &str, body: &B) -> Result<R, ProviderError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.endpoint(method))
            .query(&[("key", self.config.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(ProviderError::network)?;

        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(ProviderError::network)
        } else {
            let body = response.text().await.map_err(ProviderError::network)?;
            let err = ProviderError::from_rest_body(status.as_u16(), &body);
            error!("accounts:{} failed with {} ({})", method, err.code, status);
            Err(err)
        }
    }

    async fn password_call(
        &self,
        method: &str,
        credentials: &Credentials,
    ) -> Result<PasswordResponse, ProviderError> {
        let request = PasswordRequest {
            email: &credentials.email,
            password: &credentials.password,
            return_secure_token: true,
        };
        self.post(method, &request).await
    }

    async fn email_verified(&self, id_token: &str) -> Result<bool, ProviderError> {
        let lookup: LookupResponse = self.post("lookup", &LookupRequest { id_token }).await?;

        lookup
            .users
            .first()
            .map(|user| user.email_verified)
            .ok_or_else(|| {
                ProviderError::new(
                    INTERNAL_ERROR,
                    format!("Firebase: Account lookup returned no user ({}).", INTERNAL_ERROR),
                )
            })
    }
}

impl IdentityProvider for FirebaseAuthClient {
    async fn create_account(&self, credentials: &Credentials) -> Result<AuthResult, ProviderError> {
        info!("Creating account for {}", credentials.email);

        let created = self.password_call("signUp", credentials).await?;

        Ok(AuthResult {
            uid: created.local_id,
            email: created.email.unwrap_or_else(|| credentials.email.clone()),
            email_verified: false,
        })
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<AuthResult, ProviderError> {
        info!("Signing in {}", credentials.email);

        let session = self.password_call("signInWithPassword", credentials).await?;
        let email_verified = self.email_verified(&session.id_token).await?;

        Ok(AuthResult {
            uid: session.local_id,
            email: session.email.unwrap_or_else(|| credentials.email.clone()),
            email_verified,
        })
    }
}
