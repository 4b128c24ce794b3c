//! Common library for the ProtecTrux application
//!
//! This crate provides the configuration shared by the application's
//! components: the static application metadata with its emergency numbers,
//! the identity service connection parameters, and their error types.

pub mod app_config;
pub mod error;
pub mod identity_config;

pub use app_config::{AppConfig, EmergencyService, app_config};
pub use identity_config::IdentityConfig;

/// Example usage of the configuration modules
///
/// ```rust,no_run
/// use common::{EmergencyService, IdentityConfig, app_config};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = app_config();
///     println!("Police: {:?}", config.emergency_number(EmergencyService::Police));
///
///     let identity = IdentityConfig::from_env()?;
///     println!("Identity project: {}", identity.project_id);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
