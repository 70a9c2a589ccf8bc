#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{authorize, issue_token, verify_token, Identity, IdentityPayload, TOKEN_COOKIE};
pub use config::AppConfig;
pub use error::AppError;
pub use extractors::{CurrentIdentity, OwnerEmail, ValidatedJson};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::{cors_middleware, RequestTrace, StructuredLogger, TokenVerifier};
pub use state::{AppState, SecurityConfig};
pub use store::{DocumentStore, MemoryStore, PgStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    carmaster_test_support::logging::init();
}
