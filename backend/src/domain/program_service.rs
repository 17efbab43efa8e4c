//! Program catalogue service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::collection::Collection;
use crate::domain::ports::{CollectionRepository, ProgramsCommand, ProgramsQuery};
use crate::domain::{Error, Program, ProgramFields, ProgramFilter, RecordId};

/// Program service over a collection repository.
pub struct ProgramService<R> {
    programs: Collection<Program, R>,
}

impl<R> ProgramService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            programs: Collection::new(repository),
        }
    }
}

#[async_trait]
impl<R> ProgramsQuery for ProgramService<R>
where
    R: CollectionRepository<Program>,
{
    async fn list(&self, filter: &ProgramFilter) -> Result<Vec<Program>, Error> {
        Ok(filter.apply(self.programs.all().await?))
    }
}

#[async_trait]
impl<R> ProgramsCommand for ProgramService<R>
where
    R: CollectionRepository<Program>,
{
    async fn create(&self, fields: ProgramFields) -> Result<Program, Error> {
        let program = Program::from_fields(RecordId::random(), fields)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let created = self.programs.insert(program).await?;
        info!(id = %created.id, name = %created.name, "program created");
        Ok(created)
    }

    async fn update(&self, id: &RecordId, fields: ProgramFields) -> Result<Program, Error> {
        self.programs
            .update_with(id, move |program| {
                program
                    .apply_fields(fields)
                    .map_err(|err| Error::invalid_request(err.to_string()))
            })
            .await
    }

    async fn delete(&self, id: &RecordId) -> Result<(), Error> {
        self.programs.remove(id).await?;
        info!(%id, "program deleted");
        Ok(())
    }
}
