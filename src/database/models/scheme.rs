use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A welfare scheme. Read-only in this API: schemes are provisioned directly
/// in the database, never through an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[sqlx(flatten)]
    pub eligibility: Eligibility,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Eligibility criteria a scheme declares. Every field is optional; an empty
/// list or `None` means "no constraint on this dimension".
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase", default)]
pub struct Eligibility {
    pub states: Vec<String>,
    pub crops: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_land_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
