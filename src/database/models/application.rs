use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Default status for a freshly submitted application.
pub const STATUS_SUBMITTED: &str = "submitted";

/// A farmer's request to enroll in a scheme. Join entity referencing both
/// aggregates by id; created once, never mutated or deleted here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub farmer_id: Uuid,
    pub scheme_id: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
