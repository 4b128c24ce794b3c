//! One-shot account scripts
//!
//! Each script issues a single request to the identity service, renders the
//! outcome as console text and never propagates the provider's error.

pub mod login;
pub mod provision;
