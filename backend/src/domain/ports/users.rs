//! Driving ports for account management.
//!
//! Every value crossing these ports is a [`UserSummary`]; passwords never
//! leave the domain.

use async_trait::async_trait;

use crate::domain::{Error, RecordId, UserFields, UserSummary};

/// Lists accounts for the admin surface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    async fn list(&self) -> Result<Vec<UserSummary>, Error>;
}

/// Creates, edits and removes accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    async fn create(&self, fields: UserFields) -> Result<UserSummary, Error>;

    async fn update(&self, id: &RecordId, fields: UserFields) -> Result<UserSummary, Error>;

    async fn delete(&self, id: &RecordId) -> Result<(), Error>;
}
