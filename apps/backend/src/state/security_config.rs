use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::config::RuntimeEnv;

/// Access tokens live for one hour.
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Token signing and cookie transport settings.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Secret used to sign and verify tokens
    pub jwt_secret: Vec<u8>,
    /// Pinned signing algorithm (HS256)
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
    /// Production sets `Secure` and `SameSite=None` on the token cookie
    pub runtime_env: RuntimeEnv,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: TOKEN_TTL,
            runtime_env: RuntimeEnv::Development,
        }
    }

    pub fn with_runtime_env(mut self, runtime_env: RuntimeEnv) -> Self {
        self.runtime_env = runtime_env;
        self
    }

    pub fn secure_cookies(&self) -> bool {
        self.runtime_env == RuntimeEnv::Production
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
