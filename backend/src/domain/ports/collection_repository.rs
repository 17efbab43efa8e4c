//! Driven port for whole-array collection storage.
//!
//! Each entity type lives in one JSON array. Adapters load and overwrite the
//! full array; they seed it on first access when the backing entry is absent.

use async_trait::async_trait;

use crate::domain::CollectionRecord;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by collection store adapters.
    pub enum CollectionPersistenceError {
        /// Reading or writing the backing entry failed.
        Io { collection: String, message: String } =>
            "{collection} storage I/O failed: {message}",
        /// The stored array could not be encoded or decoded.
        Serialisation { collection: String, message: String } =>
            "{collection} storage holds malformed JSON: {message}",
    }
}

/// Storage for one collection of records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository<T: CollectionRecord>: Send + Sync {
    /// Return the full current array, seeding it when absent.
    async fn load(&self) -> Result<Vec<T>, CollectionPersistenceError>;

    /// Replace the full array.
    async fn store(&self, records: &[T]) -> Result<(), CollectionPersistenceError>;
}
