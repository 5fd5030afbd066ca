use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::{Application, Farmer, FarmerCredentials, NewFarmer, Scheme};

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. The message is the
    /// client-facing conflict description.
    #[error("{0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Persistence contract for farmer records. Email uniqueness is an invariant
/// the implementation enforces.
#[async_trait]
pub trait FarmerStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Farmer>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Farmer>, StoreError>;

    /// Credential lookup for login. This is the only read that returns the
    /// password hash.
    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<FarmerCredentials>, StoreError>;

    async fn insert(&self, farmer: NewFarmer) -> Result<Farmer, StoreError>;
}

/// Persistence contract for scheme definitions. Read-only.
#[async_trait]
pub trait SchemeStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Scheme>, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Scheme>, StoreError>;
}

/// Persistence contract for applications.
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn find_by_pair(
        &self,
        farmer_id: Uuid,
        scheme_id: Uuid,
    ) -> Result<Option<Application>, StoreError>;

    /// Insert a new application with the default "submitted" status. Fails
    /// with [`StoreError::UniqueViolation`] when the (farmer, scheme) pair
    /// already has one, so concurrent duplicates cannot both land.
    async fn insert(&self, farmer_id: Uuid, scheme_id: Uuid) -> Result<Application, StoreError>;
}

/// Liveness probe for the backing store, used by the health endpoint.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), StoreError>;
}
