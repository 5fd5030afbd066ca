use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Deserialize;
use uuid::Uuid;

use crate::database::models::Application;
use crate::error::ApiError;
use crate::middleware::AuthFarmer;
use crate::services::application;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub scheme_id: Option<String>,
}

/// POST /api/applications - apply the authenticated farmer to a scheme
pub async fn create(
    State(state): State<AppState>,
    Extension(farmer): Extension<AuthFarmer>,
    Json(payload): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let scheme_id = match payload.scheme_id.as_deref() {
        None | Some("") => return Err(ApiError::validation("schemeId required")),
        Some(raw) => {
            Uuid::parse_str(raw).map_err(|_| ApiError::validation("schemeId must be a valid id"))?
        }
    };

    let created = application::apply(
        state.farmers.as_ref(),
        state.schemes.as_ref(),
        state.applications.as_ref(),
        farmer.farmer_id,
        scheme_id,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}
