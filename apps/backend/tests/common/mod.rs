#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use carmaster_test_support::error_body::{assert_error_body, ErrorBodyLike};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    carmaster_test_support::logging::init();
}

/// Assert status, code and trace id parity of an error response.
pub async fn assert_error(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    assert_error_body(resp, status, expected_code).await
}
