use thiserror::Error;

use crate::auth::{self, password};
use crate::config::AppConfig;
use crate::database::models::{Farmer, Location, NewFarmer};
use crate::database::store::{FarmerStore, StoreError};

/// Outcomes of registration and login.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Name, email and password required")]
    MissingRegistrationFields,

    #[error("Email and password required")]
    MissingLoginFields,

    #[error("Email already registered")]
    EmailTaken,

    /// Unknown email or wrong password; the two are never distinguished.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Failed to hash password")]
    Hashing,

    #[error("Failed to issue token")]
    TokenIssue,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Profile supplied at registration. Everything beyond the three required
/// fields is stored as given.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub location: Location,
    pub crops: Vec<String>,
    pub annual_income: Option<f64>,
    pub land_size: Option<f64>,
    pub category: Option<String>,
}

/// Create a farmer account. The plaintext password is hashed here and never
/// leaves this function; the returned record carries no credential material.
pub async fn register(
    farmers: &dyn FarmerStore,
    registration: Registration,
) -> Result<Farmer, AccountError> {
    if registration.name.trim().is_empty()
        || registration.email.trim().is_empty()
        || registration.password.is_empty()
    {
        return Err(AccountError::MissingRegistrationFields);
    }

    if farmers.find_by_email(&registration.email).await?.is_some() {
        return Err(AccountError::EmailTaken);
    }

    let password_hash = password::hash_password(&registration.password).map_err(|e| {
        tracing::error!("password hashing failed: {}", e);
        AccountError::Hashing
    })?;

    let new_farmer = NewFarmer {
        name: registration.name,
        email: registration.email,
        password_hash,
        location: registration.location,
        crops: registration.crops,
        annual_income: registration.annual_income,
        land_size: registration.land_size,
        category: registration.category,
    };

    // The store's unique email constraint backstops the read above.
    match farmers.insert(new_farmer).await {
        Ok(farmer) => Ok(farmer),
        Err(StoreError::UniqueViolation(_)) => Err(AccountError::EmailTaken),
        Err(e) => Err(e.into()),
    }
}

/// Authenticate a farmer and issue an identity token.
pub async fn login(
    farmers: &dyn FarmerStore,
    config: &AppConfig,
    email: &str,
    password_input: &str,
) -> Result<String, AccountError> {
    if email.is_empty() || password_input.is_empty() {
        return Err(AccountError::MissingLoginFields);
    }

    let credentials = farmers
        .credentials_by_email(email)
        .await?
        .ok_or(AccountError::InvalidCredentials)?;

    let verified = password::verify_password(password_input, &credentials.password_hash)
        .unwrap_or_else(|e| {
            tracing::error!("stored password hash is unreadable: {}", e);
            false
        });
    if !verified {
        return Err(AccountError::InvalidCredentials);
    }

    auth::issue_token(credentials.id, config).map_err(|e| {
        tracing::error!("token signing failed: {}", e);
        AccountError::TokenIssue
    })
}
