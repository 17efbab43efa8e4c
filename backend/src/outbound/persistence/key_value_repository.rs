//! In-process key-value collection store.
//!
//! Each collection is one JSON string under a fixed key (`destinations`,
//! `programs`, `users`). The store lives as long as the process; it backs the
//! `memory` storage mode and the HTTP test harness.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::CollectionRecord;
use crate::domain::ports::{CollectionPersistenceError, CollectionRepository};

/// String-keyed map of serialised collections.
#[derive(Debug, Default)]
pub struct KeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<String>, PoisonedStore> {
        let entries = self.entries.lock().map_err(|_| PoisonedStore)?;
        Ok(entries.get(key).cloned())
    }

    /// Replace the raw value under `key`.
    pub fn set(&self, key: &str, value: String) -> Result<(), PoisonedStore> {
        let mut entries = self.entries.lock().map_err(|_| PoisonedStore)?;
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// The store's lock was poisoned by a panicking writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key-value store lock poisoned")]
pub struct PoisonedStore;

/// Collection repository over a shared [`KeyValueStore`].
#[derive(Debug)]
pub struct KeyValueCollectionRepository<T> {
    store: Arc<KeyValueStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T> KeyValueCollectionRepository<T> {
    /// Keep the collection in `store`.
    pub fn new(store: Arc<KeyValueStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }
}

impl<T> Clone for KeyValueCollectionRepository<T> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.store))
    }
}

impl<T: CollectionRecord> KeyValueCollectionRepository<T> {
    fn poisoned(err: PoisonedStore) -> CollectionPersistenceError {
        CollectionPersistenceError::io(T::COLLECTION, err.to_string())
    }

    fn serialisation(err: &serde_json::Error) -> CollectionPersistenceError {
        CollectionPersistenceError::serialisation(T::COLLECTION, err.to_string())
    }

    fn write(&self, records: &[T]) -> Result<(), CollectionPersistenceError> {
        let json = serde_json::to_string(records).map_err(|err| Self::serialisation(&err))?;
        self.store
            .set(T::COLLECTION, json)
            .map_err(Self::poisoned)
    }
}

#[async_trait]
impl<T: CollectionRecord> CollectionRepository<T> for KeyValueCollectionRepository<T> {
    async fn load(&self) -> Result<Vec<T>, CollectionPersistenceError> {
        match self.store.get(T::COLLECTION).map_err(Self::poisoned)? {
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|err| Self::serialisation(&err)),
            None => {
                let seed = T::seed();
                self.write(&seed)?;
                debug!(collection = T::COLLECTION, "seeded key-value collection");
                Ok(seed)
            }
        }
    }

    async fn store(&self, records: &[T]) -> Result<(), CollectionPersistenceError> {
        self.write(records)
    }
}
