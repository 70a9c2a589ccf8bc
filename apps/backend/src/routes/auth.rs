use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::auth::claims::IdentityPayload;
use crate::auth::cookie::{cleared_token_cookie, token_cookie};
use crate::auth::jwt::issue_token;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub success: bool,
}

/// POST /jwt
///
/// Signs the submitted identity into a one-hour token and sets it as the
/// http-only `token` cookie. The token itself is never in the body.
async fn issue(
    payload: ValidatedJson<IdentityPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = payload.into_inner();
    let email = payload
        .get("email")
        .and_then(|v| v.as_str())
        .unwrap_or("-")
        .to_string();

    let token = issue_token(payload, SystemTime::now(), &app_state.security)?;
    info!(email = %email, "issued access token");

    Ok(HttpResponse::Ok()
        .cookie(token_cookie(token, &app_state.security))
        .json(AckResponse { success: true }))
}

/// POST /logout
async fn logout(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .cookie(cleared_token_cookie(&app_state.security))
        .json(AckResponse { success: true })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/jwt", web::post().to(issue))
        .route("/logout", web::post().to(logout));
}
