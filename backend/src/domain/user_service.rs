//! Account management and credential checks.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::collection::Collection;
use crate::domain::ports::{CollectionRepository, LoginService, UsersCommand, UsersQuery};
use crate::domain::{
    Error, LoginCredentials, RecordId, SessionUser, User, UserFields, UserSummary,
};

/// User service over a collection repository.
pub struct UserService<R> {
    users: Collection<User, R>,
}

impl<R> UserService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            users: Collection::new(repository),
        }
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: CollectionRepository<User>,
{
    async fn list(&self) -> Result<Vec<UserSummary>, Error> {
        Ok(self.users.all().await?.iter().map(UserSummary::from).collect())
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: CollectionRepository<User>,
{
    async fn create(&self, fields: UserFields) -> Result<UserSummary, Error> {
        let user = User::from_fields(RecordId::random(), fields)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        let created = self.users.insert(user).await?;
        info!(id = %created.id, role = %created.role, "user created");
        Ok(UserSummary::from(&created))
    }

    async fn update(&self, id: &RecordId, fields: UserFields) -> Result<UserSummary, Error> {
        let updated = self
            .users
            .update_with(id, move |user| {
                user.apply_fields(fields)
                    .map_err(|err| Error::invalid_request(err.to_string()))
            })
            .await?;
        Ok(UserSummary::from(&updated))
    }

    async fn delete(&self, id: &RecordId) -> Result<(), Error> {
        self.users.remove(id).await?;
        info!(%id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> LoginService for UserService<R>
where
    R: CollectionRepository<User>,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionUser, Error> {
        let users = self.users.all().await?;
        users
            .iter()
            .find(|user| {
                user.email == credentials.email() && user.password == credentials.password()
            })
            .map(SessionUser::from)
            .ok_or_else(|| {
                warn!(email = credentials.email(), "login rejected");
                Error::unauthorized("invalid credentials")
            })
    }
}
