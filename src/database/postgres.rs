use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Application, Farmer, FarmerCredentials, NewFarmer, Scheme};
use crate::database::store::{ApplicationStore, FarmerStore, SchemeStore, StoreError, StoreHealth};

/// Postgres error code for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Postgres-backed implementation of all store contracts, sharing one pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn a unique-violation insert failure into the conflict the caller
/// reports; everything else stays a database error.
fn map_unique_violation(err: sqlx::Error, message: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::UniqueViolation(message.to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl FarmerStore for PgStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Farmer>, StoreError> {
        let farmer = sqlx::query_as::<_, Farmer>(
            "SELECT id, name, email, state, district, crops, annual_income, land_size, category,
             created_at, updated_at
             FROM farmers
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(farmer)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Farmer>, StoreError> {
        let farmer = sqlx::query_as::<_, Farmer>(
            "SELECT id, name, email, state, district, crops, annual_income, land_size, category,
             created_at, updated_at
             FROM farmers
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(farmer)
    }

    async fn credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<FarmerCredentials>, StoreError> {
        let credentials = sqlx::query_as::<_, FarmerCredentials>(
            "SELECT id, password_hash
             FROM farmers
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    async fn insert(&self, farmer: NewFarmer) -> Result<Farmer, StoreError> {
        sqlx::query_as::<_, Farmer>(
            "INSERT INTO farmers
             (name, email, password_hash, state, district, crops, annual_income, land_size, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id, name, email, state, district, crops, annual_income, land_size, category,
             created_at, updated_at",
        )
        .bind(farmer.name)
        .bind(farmer.email)
        .bind(farmer.password_hash)
        .bind(farmer.location.state)
        .bind(farmer.location.district)
        .bind(farmer.crops)
        .bind(farmer.annual_income)
        .bind(farmer.land_size)
        .bind(farmer.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Email already registered"))
    }
}

#[async_trait]
impl SchemeStore for PgStore {
    async fn list(&self) -> Result<Vec<Scheme>, StoreError> {
        let schemes = sqlx::query_as::<_, Scheme>(
            "SELECT id, name, description, states, crops, min_income, max_income, min_land_size,
             category, created_at, updated_at
             FROM schemes
             ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(schemes)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Scheme>, StoreError> {
        let scheme = sqlx::query_as::<_, Scheme>(
            "SELECT id, name, description, states, crops, min_income, max_income, min_land_size,
             category, created_at, updated_at
             FROM schemes
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(scheme)
    }
}

#[async_trait]
impl ApplicationStore for PgStore {
    async fn find_by_pair(
        &self,
        farmer_id: Uuid,
        scheme_id: Uuid,
    ) -> Result<Option<Application>, StoreError> {
        let application = sqlx::query_as::<_, Application>(
            "SELECT id, farmer_id, scheme_id, status, created_at
             FROM applications
             WHERE farmer_id = $1 AND scheme_id = $2",
        )
        .bind(farmer_id)
        .bind(scheme_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(application)
    }

    async fn insert(&self, farmer_id: Uuid, scheme_id: Uuid) -> Result<Application, StoreError> {
        // status defaults to 'submitted' in the schema
        sqlx::query_as::<_, Application>(
            "INSERT INTO applications (farmer_id, scheme_id)
             VALUES ($1, $2)
             RETURNING id, farmer_id, scheme_id, status, created_at",
        )
        .bind(farmer_id)
        .bind(scheme_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "Already applied"))
    }
}

#[async_trait]
impl StoreHealth for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
