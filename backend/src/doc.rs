//! OpenAPI document for the HTTP surface.
//!
//! Served through Swagger UI at `/docs` in debug builds and printed by the
//! `openapi-dump` binary.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{
    CountryGroup, Destination, DestinationFields, Error, ErrorCode, Program, ProgramFields, Role,
    SessionUser, StudyLevel, UserFields, UserSummary,
};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::destinations::DeletedResponse;

/// Registers the `session` cookie as the `SessionCookie` security scheme.
struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default)
            .add_security_scheme(
                "SessionCookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "session",
                    "Signed cookie set by POST /api/v1/login or /api/v1/login/guest.",
                ))),
            );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SessionCookieScheme),
    info(
        title = "Scholar catalogue API",
        description = "Study destinations, programs and their admin surface."
    ),
    servers((url = "/", description = "Relative to the deployment base URL")),
    paths(
        crate::inbound::http::destinations::list_destinations,
        crate::inbound::http::destinations::create_destination,
        crate::inbound::http::destinations::update_destination,
        crate::inbound::http::destinations::delete_destination,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::login_guest,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::catalogue::catalogue_destinations,
        crate::inbound::http::catalogue::catalogue_destination_groups,
        crate::inbound::http::catalogue::catalogue_countries,
        crate::inbound::http::catalogue::catalogue_programs,
        crate::inbound::http::admin::admin_session,
        crate::inbound::http::admin::admin_list_programs,
        crate::inbound::http::admin::admin_create_program,
        crate::inbound::http::admin::admin_update_program,
        crate::inbound::http::admin::admin_delete_program,
        crate::inbound::http::admin::admin_list_users,
        crate::inbound::http::admin::admin_create_user,
        crate::inbound::http::admin::admin_update_user,
        crate::inbound::http::admin::admin_delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Destination,
        DestinationFields,
        CountryGroup,
        StudyLevel,
        Program,
        ProgramFields,
        UserSummary,
        UserFields,
        Role,
        SessionUser,
        LoginRequest,
        DeletedResponse,
    )),
    tags(
        (name = "destinations", description = "Destination records"),
        (name = "auth", description = "Login, guest access and sessions"),
        (name = "catalogue", description = "Browsing for signed-in visitors"),
        (name = "admin", description = "Program and user management"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn has_property(doc: &utoipa::openapi::OpenApi, schema: &str, field: &str) -> bool {
        let Some(RefOr::T(Schema::Object(object))) = doc
            .components
            .as_ref()
            .and_then(|components| components.schemas.get(schema))
        else {
            return false;
        };
        object.properties.contains_key(field)
    }

    #[rstest]
    #[case("Error", "traceId")]
    #[case("Destination", "studyLevel")]
    #[case("Destination", "whyThisDestination")]
    #[case("Program", "fieldOfStudy")]
    #[case("UserSummary", "role")]
    fn schemas_use_wire_field_names(#[case] schema: &str, #[case] field: &str) {
        assert!(has_property(&ApiDoc::openapi(), schema, field), "{schema}.{field}");
    }

    #[rstest]
    fn user_summary_omits_password() {
        assert!(!has_property(&ApiDoc::openapi(), "UserSummary", "password"));
    }

    #[rstest]
    #[case("/api/destinations")]
    #[case("/api/destinations/{id}")]
    #[case("/api/v1/login")]
    #[case("/api/v1/catalogue/destinations/grouped")]
    #[case("/api/v1/admin/users/{id}")]
    #[case("/health/ready")]
    fn documents_every_route_family(#[case] path: &str) {
        assert!(ApiDoc::openapi().paths.paths.contains_key(path));
    }

    #[rstest]
    fn registers_session_cookie_scheme() {
        let doc = ApiDoc::openapi();
        let schemes = doc
            .components
            .as_ref()
            .map(|components| &components.security_schemes)
            .expect("components");
        assert!(schemes.contains_key("SessionCookie"));
    }
}
