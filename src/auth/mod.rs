use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;

pub mod password;

/// Claims embedded in every identity token. `sub` is the farmer's id; there
/// is no server-side session store, the token is the whole session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(farmer_id: Uuid, expiry_days: i64) -> Self {
        let now = Utc::now();

        Self {
            sub: farmer_id,
            exp: (now + Duration::days(expiry_days)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Sign a token for the given farmer, valid for `config.jwt_expiry_days`.
pub fn issue_token(
    farmer_id: Uuid,
    config: &AppConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims::new(farmer_id, config.jwt_expiry_days);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
}

/// Verify a token's signature and expiry, returning the embedded claims.
pub fn verify_token(
    token: &str,
    config: &AppConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())?;

    Ok(token_data.claims)
}
