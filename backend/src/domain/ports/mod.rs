//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod collection_repository;
mod destinations;
mod login_service;
mod programs;
mod users;

#[cfg(test)]
pub use collection_repository::MockCollectionRepository;
pub use collection_repository::{CollectionPersistenceError, CollectionRepository};
#[cfg(test)]
pub use destinations::{MockDestinationsCommand, MockDestinationsQuery};
pub use destinations::{DestinationsCommand, DestinationsQuery};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use programs::{MockProgramsCommand, MockProgramsQuery};
pub use programs::{ProgramsCommand, ProgramsQuery};
#[cfg(test)]
pub use users::{MockUsersCommand, MockUsersQuery};
pub use users::{UsersCommand, UsersQuery};
