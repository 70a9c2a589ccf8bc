//! Error body assertions that don't depend on backend types.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's JSON error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub message: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

/// Assert that raw response parts carry the stable error contract:
/// - status matches
/// - `x-trace-id` header is present and equals the body `trace_id`
/// - `code` matches and `message` is non-empty
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let body: ErrorBodyLike = serde_json::from_slice(body_bytes)
        .expect("Response body should be a JSON error body");

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);
    assert_eq!(body.status, expected_status.as_u16());
    assert!(!body.message.is_empty(), "message should not be empty");

    body
}

/// Same as [`assert_error_body_from_parts`] for an actix `ServiceResponse`.
pub async fn assert_error_body(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(status, &headers, &body, expected_status, expected_code)
}
