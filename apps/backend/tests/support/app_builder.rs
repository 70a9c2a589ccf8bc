//! Test service builder: production routes and middleware over a given
//! `AppState`.

use actix_http::Request;
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, App, Error as ActixError};
use carmaster::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use carmaster::state::{AppState, SecurityConfig};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// In-memory state signed with [`TEST_SECRET`].
pub fn test_state() -> AppState {
    AppState::in_memory(SecurityConfig::new(TEST_SECRET.as_bytes()))
}

pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    actix_web::test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(carmaster::routes::configure),
    )
    .await
}

/// Same stack as `main`, CORS included, allowing [`TEST_ORIGIN`].
pub async fn create_cors_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = ActixError> {
    actix_web::test::init_service(
        App::new()
            .wrap(cors_middleware(&[TEST_ORIGIN.to_string()]))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(carmaster::routes::configure),
    )
    .await
}
