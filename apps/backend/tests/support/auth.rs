//! Token helpers for tests

use std::time::{Duration, SystemTime};

use actix_web::cookie::Cookie;
use carmaster::auth::{issue_token, IdentityPayload, TOKEN_COOKIE};
use carmaster::state::SecurityConfig;
use serde_json::json;

fn email_payload(email: &str) -> IdentityPayload {
    match json!({ "email": email }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Token for `email`, issued now.
pub fn mint_token(email: &str, sec: &SecurityConfig) -> String {
    issue_token(email_payload(email), SystemTime::now(), sec).expect("should mint token")
}

/// Token for `email` issued two hours ago, so already expired.
pub fn mint_expired_token(email: &str, sec: &SecurityConfig) -> String {
    let past = SystemTime::now() - Duration::from_secs(2 * 60 * 60);
    issue_token(email_payload(email), past, sec).expect("should mint expired token")
}

/// `token` cookie carrying a fresh token for `email`.
pub fn token_cookie(email: &str, sec: &SecurityConfig) -> Cookie<'static> {
    Cookie::new(TOKEN_COOKIE, mint_token(email, sec))
}
