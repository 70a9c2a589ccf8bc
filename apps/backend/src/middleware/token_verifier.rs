//! Access token verification for protected routes.
//!
//! Reads the `token` cookie, verifies it against the configured secret and
//! stores the decoded [`Identity`] in request extensions before calling the
//! wrapped service. A missing or invalid token ends the request with a 401
//! response rendered here, so outer layers such as CORS still decorate it.

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::debug;

use crate::auth::claims::Identity;
use crate::auth::cookie::TOKEN_COOKIE;
use crate::auth::jwt::verify_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

pub struct TokenVerifier;

impl<S, B> Transform<S, ServiceRequest> for TokenVerifier
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenVerifierMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenVerifierMiddleware { service }))
    }
}

pub struct TokenVerifierMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TokenVerifierMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(identity) => {
                req.extensions_mut().insert(identity);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(err) => {
                debug!(code = err.code(), path = %req.path(), "token rejected");
                let res = req.error_response(err).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
        }
    }
}

fn authenticate(req: &ServiceRequest) -> Result<Identity, AppError> {
    let token = req
        .cookie(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(AppError::unauthorized_missing_token)?;

    let app_state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    verify_token(&token, &app_state.security)
}
