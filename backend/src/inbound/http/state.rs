//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they can be exercised against mocks without touching storage.

use std::sync::Arc;

use crate::domain::ports::{
    CollectionRepository, DestinationsCommand, DestinationsQuery, LoginService, ProgramsCommand,
    ProgramsQuery, UsersCommand, UsersQuery,
};
use crate::domain::{Destination, DestinationService, Program, ProgramService, User, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub destinations: Arc<dyn DestinationsQuery>,
    pub destinations_command: Arc<dyn DestinationsCommand>,
    pub programs: Arc<dyn ProgramsQuery>,
    pub programs_command: Arc<dyn ProgramsCommand>,
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Wire one service per collection over the given repositories.
    ///
    /// Query and command ports of a collection share a single service so
    /// writes to that collection are serialised through one lock.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use scholar::inbound::http::state::HttpState;
    /// use scholar::outbound::persistence::{KeyValueCollectionRepository, KeyValueStore};
    ///
    /// let store = Arc::new(KeyValueStore::new());
    /// let state = HttpState::from_repositories(
    ///     Arc::new(KeyValueCollectionRepository::new(Arc::clone(&store))),
    ///     Arc::new(KeyValueCollectionRepository::new(Arc::clone(&store))),
    ///     Arc::new(KeyValueCollectionRepository::new(store)),
    /// );
    /// let _login = state.login.clone();
    /// ```
    #[must_use]
    pub fn from_repositories<D, P, U>(destinations: Arc<D>, programs: Arc<P>, users: Arc<U>) -> Self
    where
        D: CollectionRepository<Destination> + 'static,
        P: CollectionRepository<Program> + 'static,
        U: CollectionRepository<User> + 'static,
    {
        let destinations = Arc::new(DestinationService::new(destinations));
        let programs = Arc::new(ProgramService::new(programs));
        let users = Arc::new(UserService::new(users));
        Self {
            destinations: destinations.clone(),
            destinations_command: destinations,
            programs: programs.clone(),
            programs_command: programs,
            users: users.clone(),
            users_command: users.clone(),
            login: users,
        }
    }
}
