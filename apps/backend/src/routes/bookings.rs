//! Booking routes.
//!
//! Only the owner listing sits behind `TokenVerifier` and the `OwnerEmail`
//! guard. Create, read, update and delete by id are public.

use actix_web::{guard, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::extractors::{OwnerEmail, ValidatedJson};
use crate::middleware::TokenVerifier;
use crate::repos::bookings;
use crate::state::app_state::AppState;
use crate::store::Document;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<serde_json::Value>,
}

/// GET /bookings?email=
async fn list_own(
    owner: OwnerEmail,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let docs = bookings::list_bookings_for(app_state.store.as_ref(), owner.as_str()).await?;
    Ok(HttpResponse::Ok().json(docs))
}

/// POST /bookings
async fn create(
    body: ValidatedJson<Document>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = bookings::create_booking(app_state.store.as_ref(), body.into_inner()).await?;
    info!(booking_id = %id, "booking created");

    Ok(HttpResponse::Ok().json(InsertResponse {
        acknowledged: true,
        inserted_id: id,
    }))
}

/// GET /bookings/{id}
async fn get_one(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let doc = bookings::find_booking(app_state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
    Ok(HttpResponse::Ok().json(doc))
}

/// PATCH /bookings/{id} with `{"status": "..."}`
async fn update_status(
    path: web::Path<String>,
    body: ValidatedJson<StatusUpdate>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let status = match &body.status {
        Some(serde_json::Value::String(s)) if !s.trim().is_empty() => s.clone(),
        _ => {
            return Err(AppError::bad_request(
                "INVALID_STATUS",
                "Body must contain a non-empty string 'status'",
            ))
        }
    };

    let outcome = bookings::update_booking_status(app_state.store.as_ref(), &id, &status).await?;
    info!(booking_id = %id, status = %status, matched = outcome.matched, "booking status updated");

    Ok(HttpResponse::Ok().json(UpdateResponse {
        acknowledged: true,
        matched_count: outcome.matched,
        modified_count: outcome.modified,
    }))
}

/// DELETE /bookings/{id}
async fn delete(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let deleted = bookings::delete_booking(app_state.store.as_ref(), &id).await?;
    info!(booking_id = %id, deleted, "booking delete");

    Ok(HttpResponse::Ok().json(DeleteResponse {
        acknowledged: true,
        deleted_count: deleted,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/bookings")
            .guard(guard::Get())
            .route(web::get().to(list_own))
            .wrap(TokenVerifier),
    )
    .service(web::resource("/bookings").route(web::post().to(create)))
    .service(
        web::resource("/bookings/{id}")
            .route(web::get().to(get_one))
            .route(web::patch().to(update_status))
            .route(web::delete().to(delete)),
    );
}
