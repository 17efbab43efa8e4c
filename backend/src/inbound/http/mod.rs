//! HTTP inbound adapter exposing REST endpoints.

pub mod admin;
pub mod auth;
pub mod catalogue;
pub mod destinations;
pub mod error;
pub mod health;
pub mod query;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use error::ApiResult;
