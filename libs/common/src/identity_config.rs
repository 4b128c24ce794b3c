//! Connection parameters for the external identity service
//!
//! Defaults address the ProtecTrux Firebase project. Every value can be
//! overridden with a `FIREBASE_` prefixed environment variable.

use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

const DEFAULT_API_BASE_URL: &str = "https://identitytoolkit.googleapis.com";

/// Identity service configuration
#[derive(Clone, Deserialize)]
pub struct IdentityConfig {
    /// Firebase project identifier
    pub project_id: String,
    /// Web API key; never logged
    #[serde(default)]
    pub api_key: String,
    pub auth_domain: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    /// Base URL of the Identity Toolkit REST API
    pub api_base_url: String,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("project_id", &self.project_id)
            .field("api_key", &"<redacted>")
            .field("auth_domain", &self.auth_domain)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl IdentityConfig {
    /// Create a new IdentityConfig from defaults and environment variables
    ///
    /// # Environment Variables
    /// - `FIREBASE_API_KEY`: Web API key (no default)
    /// - `FIREBASE_PROJECT_ID`: Project identifier (default: "protectrux")
    /// - `FIREBASE_AUTH_DOMAIN`: Auth domain (default: "protectrux.firebaseapp.com")
    /// - `FIREBASE_MESSAGING_SENDER_ID`: Sender ID
    /// - `FIREBASE_APP_ID`: App identifier
    /// - `FIREBASE_API_BASE_URL`: REST endpoint (default: "https://identitytoolkit.googleapis.com")
    pub fn from_env() -> ConfigResult<Self> {
        let settings = Config::builder()
            .set_default("project_id", "protectrux")?
            .set_default("auth_domain", "protectrux.firebaseapp.com")?
            .set_default("messaging_sender_id", "000000000000")?
            .set_default("app_id", "1:000000000000:web:protectrux")?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(Environment::with_prefix("FIREBASE"))
            .build()?;

        let config: IdentityConfig = settings.try_deserialize()?;

        if !config.api_base_url.starts_with("http://") && !config.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::Invalid {
                key: "api_base_url",
                reason: format!("expected an http(s) URL, got {:?}", config.api_base_url),
            });
        }

        if config.api_key.is_empty() {
            warn!("FIREBASE_API_KEY is not set; the identity service will reject requests");
        }

        Ok(config)
    }

    /// Build a configuration pointing at an explicit endpoint
    pub fn with_base_url(api_key: impl Into<String>, api_base_url: impl Into<String>) -> Self {
        Self {
            project_id: "protectrux".to_string(),
            api_key: api_key.into(),
            auth_domain: "protectrux.firebaseapp.com".to_string(),
            messaging_sender_id: "000000000000".to_string(),
            app_id: "1:000000000000:web:protectrux".to_string(),
            api_base_url: api_base_url.into(),
        }
    }

    /// REST endpoint for an `accounts:*` method
    pub fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/v1/accounts:{}",
            self.api_base_url.trim_end_matches('/'),
            method
        )
    }
}
