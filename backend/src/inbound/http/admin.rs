//! Admin dashboard endpoints.
//!
//! Every handler re-checks the session role first. A non-admin session is
//! cleared and answered with `403`; no session at all is `401`.
//!
//! ```text
//! GET        /api/v1/admin/session
//! GET|POST   /api/v1/admin/programs
//! PUT|DELETE /api/v1/admin/programs/{id}
//! GET|POST   /api/v1/admin/users
//! PUT|DELETE /api/v1/admin/users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{Error, Program, ProgramFields, ProgramFilter, SessionUser, UserFields, UserSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::destinations::DeletedResponse;
use crate::inbound::http::query::record_id;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Confirm the session still belongs to an admin.
#[utoipa::path(
    get,
    path = "/api/v1/admin/session",
    responses(
        (status = 200, description = "Admin session", body = SessionUser),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin; session cleared", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminSession",
    security(("SessionCookie" = []))
)]
#[get("/admin/session")]
pub async fn admin_session(session: SessionContext) -> ApiResult<web::Json<SessionUser>> {
    session.require_admin().map(web::Json)
}

/// Every program, unfiltered.
#[utoipa::path(
    get,
    path = "/api/v1/admin/programs",
    responses(
        (status = 200, description = "Programs", body = [Program]),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminListPrograms",
    security(("SessionCookie" = []))
)]
#[get("/admin/programs")]
pub async fn admin_list_programs(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Program>>> {
    session.require_admin()?;
    Ok(web::Json(
        state.programs.list(&ProgramFilter::default()).await?,
    ))
}

/// Create a program.
#[utoipa::path(
    post,
    path = "/api/v1/admin/programs",
    request_body = ProgramFields,
    responses(
        (status = 201, description = "Created program", body = Program),
        (status = 400, description = "name, price or description missing", body = Error),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminCreateProgram",
    security(("SessionCookie" = []))
)]
#[post("/admin/programs")]
pub async fn admin_create_program(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ProgramFields>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let created = state.programs_command.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Merge fields into a program.
#[utoipa::path(
    put,
    path = "/api/v1/admin/programs/{id}",
    params(("id" = String, Path, description = "Program id")),
    request_body = ProgramFields,
    responses(
        (status = 200, description = "Updated program", body = Program),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 404, description = "Unknown program", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateProgram",
    security(("SessionCookie" = []))
)]
#[put("/admin/programs/{id}")]
pub async fn admin_update_program(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ProgramFields>,
) -> ApiResult<web::Json<Program>> {
    session.require_admin()?;
    let id = record_id(&path.into_inner())?;
    let updated = state
        .programs_command
        .update(&id, payload.into_inner())
        .await?;
    Ok(web::Json(updated))
}

/// Remove a program.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/programs/{id}",
    params(("id" = String, Path, description = "Program id")),
    responses(
        (status = 200, description = "Deleted", body = DeletedResponse),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 404, description = "Unknown program", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteProgram",
    security(("SessionCookie" = []))
)]
#[delete("/admin/programs/{id}")]
pub async fn admin_delete_program(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    session.require_admin()?;
    let id = record_id(&path.into_inner())?;
    state.programs_command.delete(&id).await?;
    Ok(web::Json(DeletedResponse::confirmed()))
}

/// Every user, without passwords.
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "Users", body = [UserSummary]),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminListUsers",
    security(("SessionCookie" = []))
)]
#[get("/admin/users")]
pub async fn admin_list_users(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<UserSummary>>> {
    session.require_admin()?;
    Ok(web::Json(state.users.list().await?))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/v1/admin/users",
    request_body = UserFields,
    responses(
        (status = 201, description = "Created user", body = UserSummary),
        (status = 400, description = "name, email or password missing, or unknown role", body = Error),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminCreateUser",
    security(("SessionCookie" = []))
)]
#[post("/admin/users")]
pub async fn admin_create_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<UserFields>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;
    let created = state.users_command.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Merge fields into a user.
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User id")),
    request_body = UserFields,
    responses(
        (status = 200, description = "Updated user", body = UserSummary),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminUpdateUser",
    security(("SessionCookie" = []))
)]
#[put("/admin/users/{id}")]
pub async fn admin_update_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UserFields>,
) -> ApiResult<web::Json<UserSummary>> {
    session.require_admin()?;
    let id = record_id(&path.into_inner())?;
    let updated = state.users_command.update(&id, payload.into_inner()).await?;
    Ok(web::Json(updated))
}

/// Remove a user.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted", body = DeletedResponse),
        (status = 401, description = "No session", body = Error),
        (status = 403, description = "Not an admin", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDeleteUser",
    security(("SessionCookie" = []))
)]
#[delete("/admin/users/{id}")]
pub async fn admin_delete_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    session.require_admin()?;
    let id = record_id(&path.into_inner())?;
    state.users_command.delete(&id).await?;
    Ok(web::Json(DeletedResponse::confirmed()))
}
