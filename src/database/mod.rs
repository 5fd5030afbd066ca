pub mod models;
pub mod postgres;
pub mod store;

pub use postgres::PgStore;
pub use store::{ApplicationStore, FarmerStore, SchemeStore, StoreError, StoreHealth};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::AppConfig;

/// Open the connection pool every store operation runs on.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
}
