//! Driving port for credential checks.
//!
//! Inbound adapters call it to turn credentials into a session projection
//! without knowing which collection store backs the accounts.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SessionUser};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Return the session projection of the account matching `credentials`.
    ///
    /// Fails with an unauthorised error when no account matches.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionUser, Error>;
}
