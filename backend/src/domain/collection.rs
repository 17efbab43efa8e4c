//! Load-mutate-store cycles over a whole-array collection.
//!
//! Every mutation is one load, one change, one store. A per-collection async
//! mutex serialises those cycles inside this process, and reads take it too
//! because a first read may write the seed. Nothing coordinates across
//! processes, so the last writer wins there.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::destination::Destination;
use super::error::Error;
use super::ports::{CollectionPersistenceError, CollectionRepository};
use super::program::Program;
use super::record_id::RecordId;
use super::seed;
use super::user::User;

/// A record type stored as one JSON array.
pub trait CollectionRecord:
    Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Storage name of the collection: file stem or key-value key.
    const COLLECTION: &'static str;
    /// Singular noun used in error messages.
    const KIND: &'static str;

    /// Identifier of this record.
    fn id(&self) -> &RecordId;

    /// Records written when the collection is first read.
    fn seed() -> Vec<Self>;
}

impl CollectionRecord for Destination {
    const COLLECTION: &'static str = "destinations";
    const KIND: &'static str = "destination";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::destinations()
    }
}

impl CollectionRecord for Program {
    const COLLECTION: &'static str = "programs";
    const KIND: &'static str = "program";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::programs()
    }
}

impl CollectionRecord for User {
    const COLLECTION: &'static str = "users";
    const KIND: &'static str = "user";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::users()
    }
}

/// Serialised access to one collection repository.
pub struct Collection<T, R> {
    repository: Arc<R>,
    cycle: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> Collection<T, R> {
    /// Wrap a repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            cycle: Mutex::new(()),
            _record: PhantomData,
        }
    }
}

impl<T, R> Collection<T, R>
where
    T: CollectionRecord,
    R: CollectionRepository<T>,
{
    fn map_persistence_error(err: CollectionPersistenceError) -> Error {
        error!(collection = T::COLLECTION, error = %err, "collection storage failed");
        Error::internal(format!("{} storage failed: {err}", T::KIND))
    }

    fn not_found(id: &RecordId) -> Error {
        Error::not_found(format!("{} {id} not found", T::KIND))
    }

    /// Current array in storage order.
    pub async fn all(&self) -> Result<Vec<T>, Error> {
        let _guard = self.cycle.lock().await;
        self.load().await
    }

    async fn load(&self) -> Result<Vec<T>, Error> {
        self.repository
            .load()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn store(&self, records: &[T]) -> Result<(), Error> {
        self.repository
            .store(records)
            .await
            .map_err(Self::map_persistence_error)
    }

    /// Append `record` and persist the array.
    pub async fn insert(&self, record: T) -> Result<T, Error> {
        let _guard = self.cycle.lock().await;
        let mut records = self.load().await?;
        records.push(record.clone());
        self.store(&records).await?;
        debug!(collection = T::COLLECTION, id = %record.id(), "record created");
        Ok(record)
    }

    /// Apply `change` to the record with `id` and persist the array.
    ///
    /// Nothing is stored when the record is missing or `change` fails.
    pub async fn update_with<F>(&self, id: &RecordId, change: F) -> Result<T, Error>
    where
        F: FnOnce(&mut T) -> Result<(), Error> + Send,
    {
        let _guard = self.cycle.lock().await;
        let mut records = self.load().await?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        change(record)?;
        let updated = record.clone();
        self.store(&records).await?;
        debug!(collection = T::COLLECTION, %id, "record updated");
        Ok(updated)
    }

    /// Remove the first record with `id` and persist the array.
    pub async fn remove(&self, id: &RecordId) -> Result<(), Error> {
        let _guard = self.cycle.lock().await;
        let mut records = self.load().await?;
        let position = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(position);
        self.store(&records).await?;
        debug!(collection = T::COLLECTION, %id, "record deleted");
        Ok(())
    }
}
