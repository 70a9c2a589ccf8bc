//! Ownership check for per-user resources.

use super::claims::Identity;
use crate::AppError;

/// Allow only when the authenticated identity's `email` equals the email
/// the caller asked for. A missing query value or an identity without an
/// email is a mismatch.
pub fn authorize(identity: &Identity, requested_email: Option<&str>) -> Result<(), AppError> {
    match (identity.email(), requested_email) {
        (Some(own), Some(requested)) if own == requested => Ok(()),
        _ => Err(AppError::forbidden()),
    }
}
