use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Application, Scheme};
use crate::database::store::{ApplicationStore, FarmerStore, SchemeStore, StoreError};
use crate::services::eligibility::is_eligible;

/// Outcomes of the application workflow. Each precondition failure is a
/// distinct, terminal error; nothing is retried.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("Farmer not found")]
    FarmerNotFound,

    #[error("Scheme not found")]
    SchemeNotFound,

    #[error("Not eligible for this scheme")]
    NotEligible,

    #[error("Already applied")]
    AlreadyApplied,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Apply a farmer to a scheme.
///
/// Preconditions run in order and the first failure wins: the farmer must
/// exist, the scheme must exist, the farmer must be eligible, and the pair
/// must not already have an application. The final insert is still guarded
/// by the store's unique (farmer, scheme) constraint, so two concurrent
/// identical applications cannot both land; the loser surfaces as
/// [`ApplyError::AlreadyApplied`] exactly like a failed precondition read.
pub async fn apply(
    farmers: &dyn FarmerStore,
    schemes: &dyn SchemeStore,
    applications: &dyn ApplicationStore,
    farmer_id: Uuid,
    scheme_id: Uuid,
) -> Result<Application, ApplyError> {
    let farmer = farmers
        .find_by_id(farmer_id)
        .await?
        .ok_or(ApplyError::FarmerNotFound)?;

    let scheme = schemes
        .find_by_id(scheme_id)
        .await?
        .ok_or(ApplyError::SchemeNotFound)?;

    if !is_eligible(&farmer, &scheme.eligibility) {
        return Err(ApplyError::NotEligible);
    }

    if applications
        .find_by_pair(farmer.id, scheme.id)
        .await?
        .is_some()
    {
        return Err(ApplyError::AlreadyApplied);
    }

    match applications.insert(farmer.id, scheme.id).await {
        Ok(application) => Ok(application),
        Err(StoreError::UniqueViolation(_)) => Err(ApplyError::AlreadyApplied),
        Err(e) => Err(e.into()),
    }
}

/// List the schemes the farmer currently qualifies for.
pub async fn eligible_schemes(
    farmers: &dyn FarmerStore,
    schemes: &dyn SchemeStore,
    farmer_id: Uuid,
) -> Result<Vec<Scheme>, ApplyError> {
    let farmer = farmers
        .find_by_id(farmer_id)
        .await?
        .ok_or(ApplyError::FarmerNotFound)?;

    let all = schemes.list().await?;

    Ok(all
        .into_iter()
        .filter(|scheme| is_eligible(&farmer, &scheme.eligibility))
        .collect())
}
