use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::repos::services;
use crate::state::app_state::AppState;

/// GET /services
async fn list(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let docs = services::list_services(app_state.store.as_ref()).await?;
    Ok(HttpResponse::Ok().json(docs))
}

/// GET /services/{id}
async fn get_one(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let doc = services::find_service(app_state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service {id} not found")))?;
    Ok(HttpResponse::Ok().json(doc))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/services", web::get().to(list))
        .route("/services/{id}", web::get().to(get_one));
}
