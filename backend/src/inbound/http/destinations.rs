//! Destination CRUD endpoints kept on the unversioned path.
//!
//! ```text
//! GET    /api/destinations
//! POST   /api/destinations
//! PUT    /api/destinations/{id}
//! DELETE /api/destinations/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Destination, DestinationFields, DestinationFilter, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::query::{DestinationQuery, record_id};
use crate::inbound::http::state::HttpState;

/// Acknowledgement returned by deletes.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DeletedResponse {
    pub ok: bool,
}

impl DeletedResponse {
    pub(crate) const fn confirmed() -> Self {
        Self { ok: true }
    }
}

/// List destinations, optionally filtered.
#[utoipa::path(
    get,
    path = "/api/destinations",
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
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["destinations"],
    operation_id = "listDestinations",
    security([])
)]
#[get("/destinations")]
pub async fn list_destinations(
    state: web::Data<HttpState>,
    query: web::Query<DestinationQuery>,
) -> ApiResult<web::Json<Vec<Destination>>> {
    let filter = DestinationFilter::from(query.into_inner());
    let destinations = state.destinations.list(&filter).await?;
    Ok(web::Json(destinations))
}

/// Create a destination with a server-assigned id.
#[utoipa::path(
    post,
    path = "/api/destinations",
    request_body = DestinationFields,
    responses(
        (status = 201, description = "Created destination", body = Destination),
        (status = 400, description = "country or studyLevel missing or invalid", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["destinations"],
    operation_id = "createDestination",
    security([])
)]
#[post("/destinations")]
pub async fn create_destination(
    state: web::Data<HttpState>,
    payload: web::Json<DestinationFields>,
) -> ApiResult<HttpResponse> {
    let created = state
        .destinations_command
        .create(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

/// Merge the supplied fields into an existing destination.
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    params(("id" = String, Path, description = "Destination id")),
    request_body = DestinationFields,
    responses(
        (status = 200, description = "Updated destination", body = Destination),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown destination", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["destinations"],
    operation_id = "updateDestination",
    security([])
)]
#[put("/destinations/{id}")]
pub async fn update_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<DestinationFields>,
) -> ApiResult<web::Json<Destination>> {
    let id = record_id(&path.into_inner())?;
    let updated = state
        .destinations_command
        .update(&id, payload.into_inner())
        .await?;
    Ok(web::Json(updated))
}

/// Remove a destination.
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    params(("id" = String, Path, description = "Destination id")),
    responses(
        (status = 200, description = "Deleted", body = DeletedResponse),
        (status = 404, description = "Unknown destination", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["destinations"],
    operation_id = "deleteDestination",
    security([])
)]
#[delete("/destinations/{id}")]
pub async fn delete_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeletedResponse>> {
    let id = record_id(&path.into_inner())?;
    state.destinations_command.delete(&id).await?;
    Ok(web::Json(DeletedResponse::confirmed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockDestinationsCommand, MockDestinationsQuery};
    use crate::domain::{Criterion, RecordId, StudyLevel};
    use crate::inbound::http::test_utils::in_memory_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    fn app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(state).service(
            web::scope("/api")
                .service(list_destinations)
                .service(create_destination)
                .service(update_destination)
                .service(delete_destination),
        )
    }

    fn sample(id: &str, country: &str, level: StudyLevel) -> Destination {
        Destination::from_fields(
            RecordId::new(id).expect("id"),
            DestinationFields {
                country: Some(country.to_owned()),
                study_level: Some(level.to_string()),
                ..DestinationFields::default()
            },
        )
        .expect("valid destination")
    }

    #[rstest]
    #[actix_web::test]
    async fn query_filters_reach_the_port() {
        let mut query = MockDestinationsQuery::new();
        query
            .expect_list()
            .withf(|filter| {
                filter.country.as_deref() == Some("USA")
                    && filter.study_level == Some(Criterion::Is(StudyLevel::Postgraduate))
            })
            .times(1)
            .returning(|_| Ok(vec![sample("d1", "USA", StudyLevel::Postgraduate)]));
        let mut state = in_memory_state().get_ref().clone();
        state.destinations = std::sync::Arc::new(query);
        let app = test::init_service(app(web::Data::new(state))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/destinations?country=USA&studyLevel=Postgraduate")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
    }

    #[rstest]
    #[actix_web::test]
    async fn create_then_list_then_delete() {
        let app = test::init_service(app(in_memory_state())).await;

        let created = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/destinations")
                .set_json(json!({
                    "country": "Canada",
                    "studyLevel": "Undergraduate",
                    "visaRequirements": ["Study permit"]
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(created).await;
        let id = created
            .get("id")
            .and_then(Value::as_str)
            .expect("assigned id")
            .to_owned();
        assert_eq!(
            created.get("imageUrl").and_then(Value::as_str),
            Some("/placeholder-logo.png")
        );

        let listed: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/destinations").to_request(),
        )
        .await;
        assert_eq!(listed, json!([created]));

        let deleted = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/destinations/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::OK);
        let body: Value = test::read_body_json(deleted).await;
        assert_eq!(body, json!({ "ok": true }));

        let again = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/destinations/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[case(json!({ "studyLevel": "Undergraduate" }))]
    #[case(json!({ "country": "Canada" }))]
    #[case(json!({ "country": "Canada", "studyLevel": "Doctorate" }))]
    #[actix_web::test]
    async fn create_rejects_incomplete_payloads(#[case] payload: Value) {
        let app = test::init_service(app(in_memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/destinations")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("code"), Some(&json!("invalid_request")));
    }

    #[rstest]
    #[actix_web::test]
    async fn update_merges_and_keeps_id() {
        let mut command = MockDestinationsCommand::new();
        command
            .expect_update()
            .withf(|id, fields| {
                id.to_string() == "d1"
                    && fields.country.is_none()
                    && fields.image_url.as_deref() == Some("/flag.png")
            })
            .times(1)
            .returning(|id, fields| {
                let mut existing = sample(id.as_ref(), "USA", StudyLevel::Undergraduate);
                existing.apply_fields(fields).expect("merge");
                Ok(existing)
            });
        let mut state = in_memory_state().get_ref().clone();
        state.destinations_command = std::sync::Arc::new(command);
        let app = test::init_service(app(web::Data::new(state))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/destinations/d1")
                .set_json(json!({ "id": "other", "imageUrl": "/flag.png" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body.get("id"), Some(&json!("d1")));
        assert_eq!(body.get("country"), Some(&json!("USA")));
        assert_eq!(body.get("imageUrl"), Some(&json!("/flag.png")));
    }

    #[rstest]
    #[actix_web::test]
    async fn update_unknown_is_not_found() {
        let app = test::init_service(app(in_memory_state())).await;
        let res = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/destinations/missing")
                .set_json(json!({ "country": "Spain" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
