//! Collection storage adapters.
//!
//! Both adapters implement [`CollectionRepository`](crate::domain::ports::CollectionRepository)
//! for every [`CollectionRecord`](crate::domain::CollectionRecord):
//!
//! - **json-file**: one pretty-printed JSON array per collection on disk,
//!   replaced atomically on every store.
//! - **memory**: a process-wide key-value map holding one JSON string per
//!   collection under its fixed key.
//!
//! Adapters only translate between JSON and domain records. Seeding on first
//! read is the only behaviour beyond plain load and store.

mod atomic_io;
mod json_file_repository;
mod key_value_repository;

pub use json_file_repository::JsonFileCollectionRepository;
pub use key_value_repository::{KeyValueCollectionRepository, KeyValueStore, PoisonedStore};
