//! Driving ports for program listings.

use async_trait::async_trait;

use crate::domain::{Error, Program, ProgramFields, ProgramFilter, RecordId};

/// Read side of the program catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgramsQuery: Send + Sync {
    /// Programs matching `filter`, in storage order.
    async fn list(&self, filter: &ProgramFilter) -> Result<Vec<Program>, Error>;
}

/// Write side of the program catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProgramsCommand: Send + Sync {
    async fn create(&self, fields: ProgramFields) -> Result<Program, Error>;

    async fn update(&self, id: &RecordId, fields: ProgramFields) -> Result<Program, Error>;

    async fn delete(&self, id: &RecordId) -> Result<(), Error>;
}
