use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use super::claims::{Identity, IdentityPayload, RESERVED_CLAIMS};
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Sign `payload` into an access token that expires `security.token_ttl`
/// after `now`.
pub fn issue_token(
    payload: IdentityPayload,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    if let Some(claim) = RESERVED_CLAIMS.iter().find(|c| payload.contains_key(**c)) {
        return Err(AppError::bad_request(
            "RESERVED_CLAIM",
            format!("payload must not contain the '{claim}' claim"),
        ));
    }

    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;
    let exp = iat + security.token_ttl.as_secs() as i64;

    let identity = Identity { payload, iat, exp };

    encode(
        &Header::new(security.algorithm),
        &identity,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Check signature and expiry and return the embedded identity.
///
/// Errors:
/// - Expired token → `AppError::UnauthorizedExpiredToken`
/// - Bad signature or any other decode failure → `AppError::UnauthorizedInvalidToken`
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Identity, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.validate_exp = true;
    // Audience is client-supplied payload here, not something we check.
    validation.validate_aud = false;

    decode::<Identity>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized_expired_token(),
        _ => AppError::unauthorized_invalid_token(),
    })
}
