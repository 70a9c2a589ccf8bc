//! Collection-level access used by the route handlers.

pub mod bookings;
pub mod services;
