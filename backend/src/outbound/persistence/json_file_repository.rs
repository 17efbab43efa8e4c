//! Collection repository storing each collection as `<data_dir>/<name>.json`.

use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::info;

use crate::domain::CollectionRecord;
use crate::domain::ports::{CollectionPersistenceError, CollectionRepository};

use super::atomic_io::write_atomic;

/// JSON file store for one collection.
///
/// The data directory is created on first use. A missing file is written
/// with the collection's seed; an empty file reads as an empty array.
///
/// # Examples
/// ```no_run
/// use scholar::domain::Program;
/// use scholar::outbound::persistence::JsonFileCollectionRepository;
///
/// let programs = JsonFileCollectionRepository::<Program>::new("data");
/// assert!(programs.file_path().ends_with("programs.json"));
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileCollectionRepository<T> {
    data_dir: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: CollectionRecord> JsonFileCollectionRepository<T> {
    /// Store the collection under `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            _record: PhantomData,
        }
    }

    fn file_name() -> String {
        format!("{}.json", T::COLLECTION)
    }

    /// Full path of the backing file.
    #[must_use]
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(Self::file_name())
    }

    fn io_error(err: &io::Error) -> CollectionPersistenceError {
        CollectionPersistenceError::io(T::COLLECTION, err.to_string())
    }

    fn open_data_dir(data_dir: &Path) -> Result<Dir, CollectionPersistenceError> {
        Dir::create_ambient_dir_all(data_dir, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(data_dir, ambient_authority()))
            .map_err(|err| Self::io_error(&err))
    }

    fn write_records(dir: &Dir, records: &[T]) -> Result<(), CollectionPersistenceError> {
        let json = serde_json::to_string_pretty(records).map_err(|err| {
            CollectionPersistenceError::serialisation(T::COLLECTION, err.to_string())
        })?;
        write_atomic(dir, &Self::file_name(), &json).map_err(|err| Self::io_error(&err))
    }

    fn load_blocking(data_dir: &Path) -> Result<Vec<T>, CollectionPersistenceError> {
        let dir = Self::open_data_dir(data_dir)?;
        match dir.read_to_string(Self::file_name()) {
            Ok(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
                CollectionPersistenceError::serialisation(T::COLLECTION, err.to_string())
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let seed = T::seed();
                Self::write_records(&dir, &seed)?;
                info!(
                    collection = T::COLLECTION,
                    records = seed.len(),
                    "seeded collection file"
                );
                Ok(seed)
            }
            Err(err) => Err(Self::io_error(&err)),
        }
    }

    fn store_blocking(data_dir: &Path, records: &[T]) -> Result<(), CollectionPersistenceError> {
        let dir = Self::open_data_dir(data_dir)?;
        Self::write_records(&dir, records)
    }

    fn join_error(err: &tokio::task::JoinError) -> CollectionPersistenceError {
        CollectionPersistenceError::io(T::COLLECTION, format!("storage task failed: {err}"))
    }
}

#[async_trait]
impl<T: CollectionRecord> CollectionRepository<T> for JsonFileCollectionRepository<T> {
    async fn load(&self) -> Result<Vec<T>, CollectionPersistenceError> {
        let data_dir = self.data_dir.clone();
        tokio::task::spawn_blocking(move || Self::load_blocking(&data_dir))
            .await
            .map_err(|err| Self::join_error(&err))?
    }

    async fn store(&self, records: &[T]) -> Result<(), CollectionPersistenceError> {
        let data_dir = self.data_dir.clone();
        let records = records.to_vec();
        tokio::task::spawn_blocking(move || Self::store_blocking(&data_dir, &records))
            .await
            .map_err(|err| Self::join_error(&err))?
    }
}
