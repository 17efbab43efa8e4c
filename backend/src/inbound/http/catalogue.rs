//! Catalogue read endpoints for signed-in visitors (guests included).
//!
//! ```text
//! GET /api/v1/catalogue/destinations
//! GET /api/v1/catalogue/destinations/grouped
//! GET /api/v1/catalogue/countries
//! GET /api/v1/catalogue/programs
//! ```

use actix_web::{get, web};

use crate::domain::{CountryGroup, Destination, DestinationFilter, Error, Program, ProgramFilter};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{DestinationQuery, ProgramQuery};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Filtered destinations.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/destinations",
    params(
        ("country" = Option<String>, Query, description = "Exact country; `All` disables"),
        ("studyLevel" = Option<String>, Query, description = "Undergraduate or Postgraduate; other values match nothing"),
        ("search" = Option<String>, Query, description = "Case-insensitive country substring"),
        ("documents" = Option<String>, Query, description = "Comma-separated required documents"),
        ("visas" = Option<String>, Query, description = "Comma-separated visa requirements"),
        ("exams" = Option<String>, Query, description = "Comma-separated exam requirements")
    ),
    responses(
        (status = 200, description = "Destinations", body = [Destination]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "catalogueDestinations",
    security(("SessionCookie" = []))
)]
#[get("/catalogue/destinations")]
pub async fn catalogue_destinations(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<DestinationQuery>,
) -> ApiResult<web::Json<Vec<Destination>>> {
    session.require_user()?;
    let filter = DestinationFilter::from(query.into_inner());
    Ok(web::Json(state.destinations.list(&filter).await?))
}

/// Filtered destinations grouped by country, one row per study level.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/destinations/grouped",
    params(
        ("country" = Option<String>, Query, description = "Exact country; `All` disables"),
        ("studyLevel" = Option<String>, Query, description = "Undergraduate or Postgraduate; other values match nothing"),
        ("search" = Option<String>, Query, description = "Case-insensitive country substring")
    ),
    responses(
        (status = 200, description = "Country groups", body = [CountryGroup]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "catalogueDestinationGroups",
    security(("SessionCookie" = []))
)]
#[get("/catalogue/destinations/grouped")]
pub async fn catalogue_destination_groups(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<DestinationQuery>,
) -> ApiResult<web::Json<Vec<CountryGroup>>> {
    session.require_user()?;
    let filter = DestinationFilter::from(query.into_inner());
    Ok(web::Json(state.destinations.grouped(&filter).await?))
}

/// Distinct destination countries.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/countries",
    responses(
        (status = 200, description = "Countries in first-seen order", body = [String]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "catalogueCountries",
    security(("SessionCookie" = []))
)]
#[get("/catalogue/countries")]
pub async fn catalogue_countries(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<String>>> {
    session.require_user()?;
    Ok(web::Json(state.destinations.countries().await?))
}

/// Filtered programs.
#[utoipa::path(
    get,
    path = "/api/v1/catalogue/programs",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive name or description substring"),
        ("category" = Option<String>, Query, description = "Exact category; `All` disables"),
        ("destination" = Option<String>, Query, description = "Exact destination; `All` disables"),
        ("studyLevel" = Option<String>, Query, description = "Exact study level; `All` disables"),
        ("fieldOfStudy" = Option<String>, Query, description = "Exact field of study; `All` disables"),
        ("ieltsRequired" = Option<bool>, Query, description = "IELTS requirement flag; unrecognised values match nothing"),
        ("minPrice" = Option<f64>, Query, description = "Inclusive lower price bound"),
        ("maxPrice" = Option<f64>, Query, description = "Inclusive upper price bound")
    ),
    responses(
        (status = 200, description = "Programs", body = [Program]),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "cataloguePrograms",
    security(("SessionCookie" = []))
)]
#[get("/catalogue/programs")]
pub async fn catalogue_programs(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ProgramQuery>,
) -> ApiResult<web::Json<Vec<Program>>> {
    session.require_user()?;
    let filter = ProgramFilter::from(query.into_inner());
    Ok(web::Json(state.programs.list(&filter).await?))
}
