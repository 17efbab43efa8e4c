//! Driving ports for the destination catalogue and its admin surface.

use async_trait::async_trait;

use crate::domain::{
    CountryGroup, Destination, DestinationFields, DestinationFilter, Error, RecordId,
};

/// Read side of the destination catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationsQuery: Send + Sync {
    /// Destinations matching `filter`, in storage order.
    async fn list(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, Error>;

    /// Filtered destinations grouped by country for the catalogue view.
    async fn grouped(&self, filter: &DestinationFilter) -> Result<Vec<CountryGroup>, Error>;

    /// Distinct countries in first-seen order.
    async fn countries(&self) -> Result<Vec<String>, Error>;
}

/// Write side of the destination catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationsCommand: Send + Sync {
    /// Validate and append a new destination with a fresh id.
    async fn create(&self, fields: DestinationFields) -> Result<Destination, Error>;

    /// Overwrite the supplied fields of an existing destination.
    async fn update(&self, id: &RecordId, fields: DestinationFields)
    -> Result<Destination, Error>;

    /// Remove exactly one destination.
    async fn delete(&self, id: &RecordId) -> Result<(), Error>;
}
