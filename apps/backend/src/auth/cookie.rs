//! Cookie transport for access tokens.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};

use crate::state::security_config::SecurityConfig;

pub const TOKEN_COOKIE: &str = "token";

/// `token` cookie carrying `token`, valid as long as the token itself.
pub fn token_cookie(token: String, security: &SecurityConfig) -> Cookie<'static> {
    base_cookie(token, security)
        .max_age(Duration::seconds(security.token_ttl.as_secs() as i64))
        .finish()
}

/// Expired, empty `token` cookie that makes the browser drop the credential.
pub fn cleared_token_cookie(security: &SecurityConfig) -> Cookie<'static> {
    base_cookie(String::new(), security)
        .max_age(Duration::ZERO)
        .finish()
}

fn base_cookie(value: String, security: &SecurityConfig) -> actix_web::cookie::CookieBuilder<'static> {
    let secure = security.secure_cookies();
    // Browsers only honour SameSite=None on secure cookies.
    let same_site = if secure { SameSite::None } else { SameSite::Lax };

    Cookie::build(TOKEN_COOKIE, value)
        .http_only(true)
        .secure(secure)
        .same_site(same_site)
        .path("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuntimeEnv;

    #[test]
    fn development_cookie_is_http_only_and_lax() {
        let cookie = token_cookie("abc".into(), &SecurityConfig::default());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn production_cookie_is_secure_cross_site() {
        let security = SecurityConfig::default().with_runtime_env(RuntimeEnv::Production);
        let cookie = token_cookie("abc".into(), &security);

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn cleared_cookie_expires_immediately() {
        let cookie = cleared_token_cookie(&SecurityConfig::default());

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.http_only(), Some(true));
    }
}
