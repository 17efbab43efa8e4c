//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::web;

use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{KeyValueCollectionRepository, KeyValueStore};

/// Session middleware with a fresh key, cookie name `session` and no
/// `Secure` flag so plain HTTP test requests carry it.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// The `session` cookie set by `response`.
///
/// # Panics
/// Panics when the response did not set a session cookie.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
        .unwrap_or_else(|| panic!("response should set a session cookie"))
}

/// Handler state over a fresh seeded in-memory store.
pub fn in_memory_state() -> web::Data<HttpState> {
    let store = Arc::new(KeyValueStore::new());
    web::Data::new(HttpState::from_repositories(
        Arc::new(KeyValueCollectionRepository::new(Arc::clone(&store))),
        Arc::new(KeyValueCollectionRepository::new(Arc::clone(&store))),
        Arc::new(KeyValueCollectionRepository::new(store)),
    ))
}
