use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;

use crate::database::models::{Farmer, Location};
use crate::error::ApiError;
use crate::services::account::{self, Registration};
use crate::state::AppState;

/// Request body for POST /api/auth/register. The required fields are
/// validated by the account service so their absence maps to the workflow's
/// own message rather than a deserialization error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub crops: Vec<String>,
    pub annual_income: Option<f64>,
    pub land_size: Option<f64>,
    pub category: Option<String>,
}

/// POST /api/auth/register - create a farmer account
///
/// Returns the stored farmer on success; the password hash never appears in
/// the response.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Farmer>), ApiError> {
    let registration = Registration {
        name: payload.name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        password: payload.password.unwrap_or_default(),
        location: payload.location,
        crops: payload.crops,
        annual_income: payload.annual_income,
        land_size: payload.land_size,
        category: payload.category,
    };

    let farmer = account::register(state.farmers.as_ref(), registration).await?;

    Ok((StatusCode::CREATED, Json(farmer)))
}
