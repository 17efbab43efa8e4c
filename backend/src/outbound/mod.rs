//! Outbound adapters implementing domain ports for infrastructure.
//!
//! - **persistence**: JSON file and in-process key-value collection stores.
//!
//! Adapters are thin translators between domain records and their stored
//! representation. They contain no business logic.

pub mod persistence;
