//! Session helpers keeping handlers free of cookie plumbing.
//!
//! The signed cookie holds one [`SessionUser`] under a fixed key. Handlers
//! ask for "any signed-in user" or "an admin" and get domain errors back.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::{info, warn};

use crate::domain::{Error, SessionUser};

pub(crate) const SESSION_USER_KEY: &str = "session_user";

/// Newtype wrapper exposing session operations in domain terms.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Wrap the underlying Actix session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self(session)
    }

    /// Store the signed-in user, replacing any previous one.
    pub fn persist_user(&self, user: &SessionUser) -> Result<(), Error> {
        self.0.renew();
        self.0
            .insert(SESSION_USER_KEY, user)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// The signed-in user, if the cookie carries a readable one.
    ///
    /// A cookie whose payload no longer decodes counts as no session.
    #[must_use]
    pub fn user(&self) -> Option<SessionUser> {
        self.0
            .get::<SessionUser>(SESSION_USER_KEY)
            .unwrap_or_else(|error| {
                warn!(%error, "unreadable session user in cookie");
                None
            })
    }

    /// Require a signed-in user or fail with `401 Unauthorized`.
    pub fn require_user(&self) -> Result<SessionUser, Error> {
        self.user()
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Require an admin session.
    ///
    /// A session without the admin role is cleared and the request is
    /// forbidden; no session at all is unauthorised.
    pub fn require_admin(&self) -> Result<SessionUser, Error> {
        let user = self.require_user()?;
        if user.is_admin() {
            return Ok(user);
        }
        info!(user_id = %user.id, "non-admin session cleared at admin gate");
        self.clear();
        Err(Error::forbidden("admin role required"))
    }

    /// Drop the session and expire its cookie.
    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
