//! Destination catalogue service implementing the destination driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::collection::Collection;
use crate::domain::filter::{distinct_countries, group_by_country};
use crate::domain::ports::{CollectionRepository, DestinationsCommand, DestinationsQuery};
use crate::domain::{
    CountryGroup, Criterion, Destination, DestinationFields, DestinationFilter,
    DestinationValidationError, Error, RecordId,
};

/// Destination service over a collection repository.
pub struct DestinationService<R> {
    destinations: Collection<Destination, R>,
}

impl<R> DestinationService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            destinations: Collection::new(repository),
        }
    }
}

fn invalid(err: &DestinationValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

#[async_trait]
impl<R> DestinationsQuery for DestinationService<R>
where
    R: CollectionRepository<Destination>,
{
    async fn list(&self, filter: &DestinationFilter) -> Result<Vec<Destination>, Error> {
        Ok(filter.apply(self.destinations.all().await?))
    }

    async fn grouped(&self, filter: &DestinationFilter) -> Result<Vec<CountryGroup>, Error> {
        let rows = filter.apply(self.destinations.all().await?);
        let level = filter.study_level.as_ref().and_then(Criterion::known).copied();
        Ok(group_by_country(rows, level))
    }

    async fn countries(&self) -> Result<Vec<String>, Error> {
        Ok(distinct_countries(&self.destinations.all().await?))
    }
}

#[async_trait]
impl<R> DestinationsCommand for DestinationService<R>
where
    R: CollectionRepository<Destination>,
{
    async fn create(&self, fields: DestinationFields) -> Result<Destination, Error> {
        let destination =
            Destination::from_fields(RecordId::random(), fields).map_err(|err| invalid(&err))?;
        let created = self.destinations.insert(destination).await?;
        info!(id = %created.id, country = %created.country, "destination created");
        Ok(created)
    }

    async fn update(
        &self,
        id: &RecordId,
        fields: DestinationFields,
    ) -> Result<Destination, Error> {
        self.destinations
            .update_with(id, move |destination| {
                destination.apply_fields(fields).map_err(|err| invalid(&err))
            })
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), Error> {
        self.destinations.remove(id).await?;
        info!(%id, "destination deleted");
        Ok(())
    }
}
