use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered farmer, as stored and as returned over the wire.
///
/// The password hash is deliberately not a field here: credential material
/// only surfaces through [`FarmerCredentials`], so no read path can leak it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[sqlx(flatten)]
    pub location: Location,
    pub crops: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub state: Option<String>,
    pub district: Option<String>,
}

/// Credential lookup result for login. Not serializable.
#[derive(Debug, Clone, FromRow)]
pub struct FarmerCredentials {
    pub id: Uuid,
    pub password_hash: String,
}

/// Insert payload for a new farmer record. The password arrives here already
/// hashed; registration never hands plaintext to the store.
#[derive(Debug, Clone)]
pub struct NewFarmer {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub location: Location,
    pub crops: Vec<String>,
    pub annual_income: Option<f64>,
    pub land_size: Option<f64>,
    pub category: Option<String>,
}
