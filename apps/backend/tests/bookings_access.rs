//! Authorization pipeline on GET /bookings?email=

mod common;
mod support;

use actix_web::cookie::Cookie;
use actix_web::http::header;
use actix_web::test;
use carmaster::auth::TOKEN_COOKIE;
use carmaster::repos::bookings::create_booking;
use carmaster::state::{AppState, SecurityConfig};
use carmaster_test_support::unique_helpers::unique_email;
use serde_json::{json, Value};

use crate::common::assert_error;
use crate::support::app_builder::{
    create_cors_test_app, create_test_app, test_state, TEST_ORIGIN,
};
use crate::support::auth::{mint_expired_token, mint_token, token_cookie};

async fn seed(state: &AppState, bookings: &[Value]) {
    for booking in bookings {
        let doc = booking.as_object().cloned().unwrap();
        create_booking(state.store.as_ref(), doc).await.unwrap();
    }
}

#[actix_web::test]
async fn no_cookie_is_401() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = assert_error(resp, 401, "UNAUTHORIZED_MISSING_TOKEN").await;
    assert_eq!(body.message, "unauthorized access");
}

#[actix_web::test]
async fn expired_token_is_401() {
    let state = test_state();
    let token = mint_expired_token("a@x.com", &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .cookie(Cookie::new(TOKEN_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 401, "UNAUTHORIZED_EXPIRED_TOKEN").await;
}

#[actix_web::test]
async fn token_signed_with_other_secret_is_401() {
    let foreign = SecurityConfig::new("some-other-secret".as_bytes());
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .cookie(Cookie::new(TOKEN_COOKIE, mint_token("a@x.com", &foreign)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 401, "UNAUTHORIZED_INVALID_TOKEN").await;
}

#[actix_web::test]
async fn tampered_token_is_401() {
    let state = test_state();
    let token = mint_token("a@x.com", &state.security);
    // Change the first signature character; it carries six full bits.
    let (signed, signature) = token.rsplit_once('.').unwrap();
    let first = if signature.starts_with('A') { 'B' } else { 'A' };
    let token = format!("{signed}.{first}{}", &signature[1..]);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .cookie(Cookie::new(TOKEN_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 401, "UNAUTHORIZED_INVALID_TOKEN").await;
}

#[actix_web::test]
async fn other_identity_is_403() {
    let state = test_state();
    let cookie = token_cookie("b@x.com", &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body = assert_error(resp, 403, "FORBIDDEN").await;
    assert_eq!(body.message, "forbidden access");
}

#[actix_web::test]
async fn missing_email_query_is_403() {
    let state = test_state();
    let cookie = token_cookie("a@x.com", &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/bookings")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error(resp, 403, "FORBIDDEN").await;
}

#[actix_web::test]
async fn owner_sees_only_own_bookings() {
    let state = test_state();
    let me = unique_email("owner");
    let someone_else = unique_email("other");
    seed(
        &state,
        &[
            json!({"email": &me, "service": "Oil change", "date": "2026-10-20"}),
            json!({"email": &someone_else, "service": "Engine repair"}),
            json!({"email": &me, "service": "Battery charge"}),
        ],
    )
    .await;
    let cookie = token_cookie(&me, &state.security);
    let app = create_test_app(state).await;

    let req = test::TestRequest::get()
        .uri(&format!("/bookings?email={me}"))
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(body.len(), 2);
    assert!(body.iter().all(|b| b["email"] == me.as_str()));
    assert_eq!(body[0]["service"], "Oil change");
    assert_eq!(body[1]["service"], "Battery charge");
}

#[actix_web::test]
async fn public_booking_routes_need_no_cookie() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::post()
        .uri("/bookings")
        .set_json(json!({"email": "a@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
}

#[actix_web::test]
async fn cross_origin_401_still_carries_cors_headers() {
    let app = create_cors_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .insert_header((header::ORIGIN, TEST_ORIGIN))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    assert_error(resp.map_into_boxed_body(), 401, "UNAUTHORIZED_MISSING_TOKEN").await;
}

#[actix_web::test]
async fn cross_origin_expired_token_is_readable() {
    let state = test_state();
    let token = mint_expired_token("a@x.com", &state.security);
    let app = create_cors_test_app(state).await;

    let req = test::TestRequest::get()
        .uri("/bookings?email=a@x.com")
        .insert_header((header::ORIGIN, TEST_ORIGIN))
        .cookie(Cookie::new(TOKEN_COOKIE, token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert_error(resp.map_into_boxed_body(), 401, "UNAUTHORIZED_EXPIRED_TOKEN").await;
}
