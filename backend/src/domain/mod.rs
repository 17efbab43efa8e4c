//! Domain primitives, catalogue services and ports.
//!
//! Purpose: define the destination, program and user records, their
//! validation and filtering rules, and the services that load, change and
//! store each collection. Nothing here depends on Actix or on a concrete
//! storage backend; adapters talk to the domain through [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Destination, Program, User and their submitted field sets.
//! - DestinationFilter / ProgramFilter and the country grouping view.
//! - DestinationService, ProgramService, UserService: driving port
//!   implementations over a [`ports::CollectionRepository`].

pub mod auth;
pub mod collection;
pub mod destination;
pub mod destination_service;
pub mod error;
pub mod filter;
pub mod ports;
pub mod program;
pub mod program_service;
pub mod record_id;
pub mod seed;
pub mod study_level;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::auth::{GUEST_ID, LoginCredentials, LoginValidationError, SessionUser};
pub use self::collection::{Collection, CollectionRecord};
pub use self::destination::{
    Destination, DestinationFields, DestinationValidationError, Narrative, NarrativeItem,
    PLACEHOLDER_IMAGE,
};
pub use self::destination_service::DestinationService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::filter::{
    CountryGroup, Criterion, DestinationFilter, ProgramFilter, distinct_countries,
    group_by_country,
};
pub use self::program::{Price, Program, ProgramFields, ProgramValidationError};
pub use self::program_service::ProgramService;
pub use self::record_id::{EmptyRecordId, RecordId};
pub use self::study_level::{StudyLevel, UnknownStudyLevel};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{Role, User, UserFields, UserSummary, UserValidationError};
pub use self::user_service::UserService;
