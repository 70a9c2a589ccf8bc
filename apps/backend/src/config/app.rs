use std::path::PathBuf;

use super::db::DbSettings;
use super::{must_var, process_env, var_or, Lookup};
use crate::error::AppError;

const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Deployment environment; decides cookie transport attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeEnv {
    #[default]
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Postgres(DbSettings),
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub runtime_env: RuntimeEnv,
    pub cors_allowed_origins: Vec<String>,
    pub store: StoreKind,
    pub services_seed: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment, after loading a
    /// `.env` file from the working directory if one exists.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(env: &impl Lookup) -> Result<Self, AppError> {
        let host = var_or(env, "HOST", "0.0.0.0");
        let port = var_or(env, "PORT", "5000")
            .parse::<u16>()
            .map_err(|_| AppError::config("PORT must be a valid port number"))?;

        let jwt_secret = must_var(env, "ACCESS_TOKEN_SECRET")?;

        let runtime_env = match var_or(env, "APP_ENV", "development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => RuntimeEnv::Production,
            "development" | "dev" | "test" => RuntimeEnv::Development,
            other => {
                return Err(AppError::config(format!(
                    "APP_ENV must be 'development' or 'production', got '{other}'"
                )))
            }
        };

        let cors_allowed_origins =
            parse_origins(&var_or(env, "CORS_ALLOWED_ORIGINS", DEFAULT_ORIGIN));

        let store = match var_or(env, "STORE", "memory").to_ascii_lowercase().as_str() {
            "memory" => StoreKind::Memory,
            "postgres" => StoreKind::Postgres(DbSettings::from_lookup(env)?),
            other => {
                return Err(AppError::config(format!(
                    "STORE must be 'memory' or 'postgres', got '{other}'"
                )))
            }
        };

        let services_seed = env
            .get("SERVICES_SEED")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            jwt_secret,
            runtime_env,
            cors_allowed_origins,
            store,
            services_seed,
        })
    }
}

/// Comma-separated origins; blanks, `null` and non-http(s) entries are
/// dropped. Falls back to the local dev origin when nothing valid remains.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect();

    if origins.is_empty() {
        vec![DEFAULT_ORIGIN.to_string()]
    } else {
        origins
    }
}
