//! Access guard for per-owner listings.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Deserialize;
use tracing::warn;

use crate::auth::claims::Identity;
use crate::auth::guard::authorize;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
struct EmailQuery {
    email: Option<String>,
}

/// The `email` query parameter, proven equal to the authenticated
/// identity's email. Fails with 403 on mismatch and 401 when no identity
/// was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerEmail(pub String);

impl OwnerEmail {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromRequest for OwnerEmail {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<OwnerEmail, AppError> {
    let extensions = req.extensions();
    let identity = extensions
        .get::<Identity>()
        .ok_or_else(AppError::unauthorized_missing_token)?;

    let requested = web::Query::<EmailQuery>::from_query(req.query_string())
        .ok()
        .and_then(|q| q.into_inner().email);

    if let Err(err) = authorize(identity, requested.as_deref()) {
        warn!(path = %req.path(), "identity does not own requested email");
        return Err(err);
    }

    // authorize() only passes when the query value is present.
    requested
        .map(OwnerEmail)
        .ok_or_else(AppError::forbidden)
}
