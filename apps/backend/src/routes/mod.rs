use actix_web::web;

pub mod auth;
pub mod bookings;
pub mod health;
pub mod services;

/// Register every route. Shared by `main` and the test app builder so
/// tests exercise the production routing, including `TokenVerifier` on
/// the owner listing.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(auth::configure_routes)
        .configure(services::configure_routes)
        .configure(bookings::configure_routes);
}
