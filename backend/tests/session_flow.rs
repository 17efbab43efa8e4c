//! Login, catalogue browsing and the admin gate over the in-memory store.

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use scholar::inbound::http::admin::{admin_create_program, admin_list_users, admin_session};
use scholar::inbound::http::auth::{current_session, login, login_guest, logout};
use scholar::inbound::http::catalogue::{catalogue_countries, catalogue_programs};
use scholar::inbound::http::test_utils::{
    in_memory_state, session_cookie, test_session_middleware,
};
use serde_json::{Value, json};

fn app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(in_memory_state()).wrap(scholar::Trace).service(
        web::scope("/api/v1")
            .wrap(test_session_middleware())
            .service(login)
            .service(login_guest)
            .service(logout)
            .service(current_session)
            .service(catalogue_countries)
            .service(catalogue_programs)
            .service(admin_session)
            .service(admin_list_users)
            .service(admin_create_program),
    )
}

fn get(uri: &str, cookie: Cookie<'static>) -> actix_http::Request {
    test::TestRequest::get().uri(uri).cookie(cookie).to_request()
}

fn login_request(email: &str, password: &str) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request()
}

#[rstest]
#[actix_web::test]
async fn admin_signs_in_browses_and_manages() {
    let app = test::init_service(app()).await;
    let res = test::call_service(&app, login_request(" admin@example.com ", "password")).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = session_cookie(&res);
    let user: Value = test::read_body_json(res).await;
    assert_eq!(user.get("role"), Some(&json!("admin")));
    assert!(user.get("password").is_none());

    let programs: Value = test::call_and_read_body_json(
        &app,
        get(
            "/api/v1/catalogue/programs?category=All&minPrice=0&maxPrice=1000000",
            cookie.clone(),
        ),
    )
    .await;
    assert_eq!(programs.as_array().map(Vec::len), Some(8));

    let users: Value =
        test::call_and_read_body_json(&app, get("/api/v1/admin/users", cookie.clone())).await;
    assert_eq!(users.as_array().map(Vec::len), Some(2));

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/admin/programs")
            .cookie(cookie)
            .set_json(json!({ "name": "Nursing BSc", "price": "£9,250", "description": "Clinical placements." }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn wrong_password_is_unauthorised_without_a_cookie() {
    let app = test::init_service(app()).await;
    let res = test::call_service(&app, login_request("admin@example.com", "letmein")).await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.response().cookies().all(|c| c.name() != "session"));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body.get("code"), Some(&json!("unauthorized")));
}

#[rstest]
#[actix_web::test]
async fn guest_browses_but_is_turned_away_from_admin() {
    let app = test::init_service(app()).await;
    let guest = test::call_service(
        &app,
        test::TestRequest::post().uri("/api/v1/login/guest").to_request(),
    )
    .await;
    assert_eq!(guest.status(), StatusCode::OK);
    let cookie = session_cookie(&guest);

    let countries = test::call_service(&app, get("/api/v1/catalogue/countries", cookie.clone())).await;
    assert_eq!(countries.status(), StatusCode::OK);

    let gate = test::call_service(&app, get("/api/v1/admin/session", cookie)).await;
    assert_eq!(gate.status(), StatusCode::FORBIDDEN);
    let cleared = session_cookie(&gate);

    let after = test::call_service(&app, get("/api/v1/session", cleared)).await;
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn logout_ends_the_session() {
    let app = test::init_service(app()).await;
    let res = test::call_service(&app, login_request("user@example.com", "password")).await;
    let cookie = session_cookie(&res);

    let me = test::call_service(&app, get("/api/v1/session", cookie.clone())).await;
    assert_eq!(me.status(), StatusCode::OK);

    let out = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(out.status(), StatusCode::NO_CONTENT);

    let after = test::call_service(&app, get("/api/v1/session", session_cookie(&out))).await;
    assert_eq!(after.status(), StatusCode::UNAUTHORIZED);
}
