use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;
use crate::trace_ctx;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    pub status: u16,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { detail: String },
    #[error("UnauthorizedMissingToken")]
    UnauthorizedMissingToken,
    #[error("UnauthorizedInvalidToken")]
    UnauthorizedInvalidToken,
    #[error("UnauthorizedExpiredToken")]
    UnauthorizedExpiredToken,
    #[error("Forbidden")]
    Forbidden,
    #[error("Store error: {detail}")]
    Store { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            AppError::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            AppError::UnauthorizedExpiredToken => "UNAUTHORIZED_EXPIRED_TOKEN",
            AppError::Forbidden => "FORBIDDEN",
            AppError::Store { .. } => "STORE_ERROR",
            AppError::Internal { .. } => "INTERNAL",
            AppError::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Client-facing message. Server-side failures never leak their detail.
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound { detail } => detail.clone(),
            AppError::UnauthorizedMissingToken => "unauthorized access".to_string(),
            AppError::UnauthorizedInvalidToken => "unauthorized access".to_string(),
            AppError::UnauthorizedExpiredToken => "unauthorized access: token expired".to_string(),
            AppError::Forbidden => "forbidden access".to_string(),
            AppError::Store { .. } => "storage operation failed".to_string(),
            AppError::Internal { .. } => "internal server error".to_string(),
            AppError::Config { .. } => "server misconfigured".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnauthorizedMissingToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredToken => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(code: &'static str, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            detail: detail.into(),
        }
    }

    pub fn unauthorized_missing_token() -> Self {
        Self::UnauthorizedMissingToken
    }

    pub fn unauthorized_invalid_token() -> Self {
        Self::UnauthorizedInvalidToken
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::UnauthorizedExpiredToken
    }

    pub fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn store(detail: impl Into<String>) -> Self {
        Self::Store {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::store(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(trace_id = %trace_id, code = self.code(), error = %self, "request failed");
        }

        let body = ErrorBody {
            message: self.message(),
            code: self.code().to_string(),
            status: status.as_u16(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .insert_header(("x-trace-id", trace_id))
            .json(body)
    }
}
