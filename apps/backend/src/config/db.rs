use super::{must_var, var_or, Lookup};
use crate::error::AppError;

/// Connection settings for the PostgreSQL document store.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
}

impl std::fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbSettings")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl DbSettings {
    pub fn from_lookup(env: &impl Lookup) -> Result<Self, AppError> {
        let user = must_var(env, "DB_USER")?;
        let password = must_var(env, "DB_PASSWORD")?;
        let host = var_or(env, "DB_HOST", "localhost");
        let port = var_or(env, "DB_PORT", "5432")
            .parse::<u16>()
            .map_err(|_| AppError::config("DB_PORT must be a valid port number"))?;
        let name = var_or(env, "DB_NAME", "carmaster");
        let max_connections = var_or(env, "DB_MAX_CONNECTIONS", "10")
            .parse::<u32>()
            .map_err(|_| AppError::config("DB_MAX_CONNECTIONS must be a positive integer"))?;

        Ok(Self {
            user,
            password,
            host,
            port,
            name,
            max_connections,
        })
    }

    pub fn url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
