//! Scholar catalogue backend library.
//!
//! Hexagonal layout: [`domain`] holds records, rules and ports; [`inbound`]
//! adapts HTTP onto the driving ports; [`outbound`] implements the
//! collection store.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::trace::Trace;
