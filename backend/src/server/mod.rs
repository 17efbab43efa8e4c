//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use state_builders::build_http_state;

use scholar::Trace;
#[cfg(debug_assertions)]
use scholar::doc::ApiDoc;
use scholar::inbound::http::admin::{
    admin_create_program, admin_create_user, admin_delete_program, admin_delete_user,
    admin_list_programs, admin_list_users, admin_session, admin_update_program, admin_update_user,
};
use scholar::inbound::http::auth::{current_session, login, login_guest, logout};
use scholar::inbound::http::catalogue::{
    catalogue_countries, catalogue_destination_groups, catalogue_destinations, catalogue_programs,
};
use scholar::inbound::http::destinations::{
    create_destination, delete_destination, list_destinations, update_destination,
};
use scholar::inbound::http::error::{json_error_handler, path_error_handler, query_error_handler};
use scholar::inbound::http::health::{HealthState, live, ready};
use scholar::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn session_middleware(
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .build()
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let api_v1 = web::scope("/api/v1")
        .wrap(session_middleware(key, cookie_secure, same_site))
        .service(login)
        .service(login_guest)
        .service(logout)
        .service(current_session)
        .service(catalogue_destinations)
        .service(catalogue_destination_groups)
        .service(catalogue_countries)
        .service(catalogue_programs)
        .service(admin_session)
        .service(admin_list_programs)
        .service(admin_create_program)
        .service(admin_update_program)
        .service(admin_delete_program)
        .service(admin_list_users)
        .service(admin_create_user)
        .service(admin_update_user)
        .service(admin_delete_user);

    let legacy = web::scope("/api")
        .service(list_destinations)
        .service(create_destination)
        .service(update_destination)
        .service(delete_destination);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .wrap(Trace)
        .service(api_v1)
        .service(legacy)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the listener and start serving.
///
/// # Errors
/// Propagates [`std::io::Error`] when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: &ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(config);
    let key = config.key.clone();
    let cookie_secure = config.cookie_secure;
    let same_site = config.same_site;
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            key: key.clone(),
            cookie_secure,
            same_site,
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
