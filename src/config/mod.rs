use std::env;

/// Runtime configuration, read once from the environment at startup and
/// passed into the HTTP surface through [`crate::state::AppState`]. Nothing
/// reads the environment after construction.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiry_days: i64,
}

/// Fallback signing secret, matching the development default of the original
/// deployment. Unusable for anything real; `warn_if_insecure` flags it.
const DEFAULT_JWT_SECRET: &str = "secret123";

const DEFAULT_DATABASE_URL: &str = "postgres://127.0.0.1:5432/farmer_schemes";

impl AppConfig {
    pub fn from_env() -> Self {
        Self::defaults().with_env_overrides()
    }

    fn defaults() -> Self {
        Self {
            port: 5000,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: 10,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            jwt_expiry_days: 7,
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("PORT") {
            self.port = v.parse().unwrap_or(self.port);
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            if !v.is_empty() {
                self.database_url = v;
            }
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database_max_connections = v.parse().unwrap_or(self.database_max_connections);
        }
        if let Ok(v) = env::var("JWT_SECRET") {
            if !v.is_empty() {
                self.jwt_secret = v;
            }
        }
        if let Ok(v) = env::var("JWT_EXPIRY_DAYS") {
            self.jwt_expiry_days = v.parse().unwrap_or(self.jwt_expiry_days);
        }
        self
    }

    /// Log a warning for every placeholder default still in effect. These
    /// must not survive into a real deployment.
    pub fn warn_if_insecure(&self) {
        if self.jwt_secret == DEFAULT_JWT_SECRET {
            tracing::warn!("JWT_SECRET is not set; using the insecure built-in default");
        }
        if self.database_url == DEFAULT_DATABASE_URL {
            tracing::warn!("DATABASE_URL is not set; using the local development default");
        }
    }
}
