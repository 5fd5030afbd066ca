use axum::{extract::State, response::Json};

use crate::database::models::Scheme;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/schemes - list every scheme in the registry
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Scheme>>, ApiError> {
    let schemes = state.schemes.list().await?;

    Ok(Json(schemes))
}
