use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::claims::Identity;
use crate::error::AppError;

/// The identity `TokenVerifier` attached to this request.
///
/// Only meaningful behind `TokenVerifier`; elsewhere it fails with 401.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl Deref for CurrentIdentity {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Identity>()
                .cloned()
                .map(CurrentIdentity)
                .ok_or_else(AppError::unauthorized_missing_token),
        )
    }
}
