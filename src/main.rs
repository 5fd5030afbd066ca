use farmer_schemes_api::config::AppConfig;
use farmer_schemes_api::database::{self, PgStore};
use farmer_schemes_api::routes;
use farmer_schemes_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmer_schemes_api=debug,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env();
    config.warn_if_insecure();

    let pool = database::connect(&config).await?;
    tracing::info!("database connected");

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let state = AppState::new(PgStore::new(pool), config);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("Farmer Schemes API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
