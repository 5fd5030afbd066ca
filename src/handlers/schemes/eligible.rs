use axum::{extract::State, response::Json, Extension};

use crate::database::models::Scheme;
use crate::error::ApiError;
use crate::middleware::AuthFarmer;
use crate::services::application;
use crate::state::AppState;

/// GET /api/schemes/eligible - schemes the authenticated farmer qualifies for
pub async fn eligible(
    State(state): State<AppState>,
    Extension(farmer): Extension<AuthFarmer>,
) -> Result<Json<Vec<Scheme>>, ApiError> {
    let schemes = application::eligible_schemes(
        state.farmers.as_ref(),
        state.schemes.as_ref(),
        farmer.farmer_id,
    )
    .await?;

    Ok(Json(schemes))
}
