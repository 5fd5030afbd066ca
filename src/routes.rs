use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::jwt_auth_middleware;
use crate::state::AppState;

/// Build the application router. The binary and the integration tests both
/// go through here, so they exercise the same routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes
        .merge(auth_routes())
        // Scheme browsing (listing is public, the eligible view is not)
        .merge(scheme_routes(state.clone()))
        // Applications (protected)
        .merge(application_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_routes() -> Router<AppState> {
    use crate::handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
}

fn scheme_routes(state: AppState) -> Router<AppState> {
    use crate::handlers::schemes;

    Router::new()
        .route("/api/schemes/eligible", get(schemes::eligible))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
        .route("/api/schemes", get(schemes::list))
}

fn application_routes(state: AppState) -> Router<AppState> {
    use crate::handlers::applications;

    Router::new()
        .route("/api/applications", post(applications::create))
        .route_layer(middleware::from_fn_with_state(state, jwt_auth_middleware))
}

async fn root() -> &'static str {
    "Farmer Schemes API is running"
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.health.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
