//! User record use-cases.
//!
//! Validation runs here, at the construction and update boundaries, before
//! anything reaches the storage port.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::ports::{
    RoleRepository, RoleRepositoryError, UserRecordRepository, UserRecordRepositoryError,
};
use crate::domain::{
    RoleName, UserRecord, UserRecordId, UserRecordView, UserValidationError,
};

/// Errors returned by [`UserRecordService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRecordServiceError {
    /// A field failed validation; nothing was stored.
    #[error(transparent)]
    Validation(#[from] UserValidationError),
    /// The user record store rejected the operation.
    #[error(transparent)]
    Records(#[from] UserRecordRepositoryError),
    /// The role store rejected the operation.
    #[error(transparent)]
    Roles(#[from] RoleRepositoryError),
    /// No record exists with the given identifier.
    #[error("user record {id} not found")]
    UserNotFound { id: UserRecordId },
    /// No role exists with the given name.
    #[error("role {name} not found")]
    RoleNotFound { name: String },
}

/// Service coordinating validation with the record and role stores.
#[derive(Clone)]
pub struct UserRecordService<U, R> {
    records: Arc<U>,
    roles: Arc<R>,
}

impl<U, R> UserRecordService<U, R> {
    /// Create a service over the given stores.
    pub fn new(records: Arc<U>, roles: Arc<R>) -> Self {
        Self { records, roles }
    }
}

impl<U, R> UserRecordService<U, R>
where
    U: UserRecordRepository,
    R: RoleRepository,
{
    /// Validate and store a new record.
    ///
    /// # Errors
    ///
    /// Returns [`UserRecordServiceError::Validation`] before touching storage
    /// when a field is invalid, or [`UserRecordServiceError::Records`] when
    /// the store refuses the insert (for example a duplicate email).
    pub async fn register(&self, record: UserRecord) -> Result<UserRecord, UserRecordServiceError> {
        record.validate()?;
        let stored = self.records.insert(record).await?;
        if let Some(id) = stored.id() {
            info!(user_id = %id, email = %stored.email(), "user record registered");
        }
        Ok(stored)
    }

    /// Validate and replace an existing record.
    ///
    /// # Errors
    ///
    /// Same as [`UserRecordService::register`], plus the store's
    /// `NotFound`/`MissingId` failures.
    pub async fn update(&self, record: UserRecord) -> Result<UserRecord, UserRecordServiceError> {
        record.validate()?;
        let stored = self.records.update(record).await?;
        if let Some(id) = stored.id() {
            debug!(user_id = %id, "user record updated");
        }
        Ok(stored)
    }

    /// Load a record with its roles resolved.
    pub async fn get(&self, id: UserRecordId) -> Result<UserRecord, UserRecordServiceError> {
        self.records
            .find_by_id(id)
            .await?
            .ok_or(UserRecordServiceError::UserNotFound { id })
    }

    /// Grant the named role to a record.
    ///
    /// Granting a role the record already holds leaves it unchanged.
    pub async fn assign_role(
        &self,
        id: UserRecordId,
        role_name: &RoleName,
    ) -> Result<UserRecord, UserRecordServiceError> {
        let role = self.roles.find_by_name(role_name).await?.ok_or_else(|| {
            UserRecordServiceError::RoleNotFound {
                name: role_name.to_string(),
            }
        })?;
        let mut record = self.get(id).await?;
        if !record.add_role(role) {
            return Ok(record);
        }
        let stored = self.records.update(record).await?;
        info!(user_id = %id, role = %role_name, "role assigned");
        Ok(stored)
    }

    /// Add one finished game to a record's score aggregates.
    pub async fn record_game(
        &self,
        id: UserRecordId,
        score: f64,
    ) -> Result<UserRecord, UserRecordServiceError> {
        let mut record = self.get(id).await?;
        record.record_score(score);
        let stored = self.records.update(record).await?;
        debug!(
            user_id = %id,
            games = stored.number_of_scores(),
            "game recorded"
        );
        Ok(stored)
    }

    /// Set one daily metric on a record.
    pub async fn record_daily_metric(
        &self,
        id: UserRecordId,
        date: &str,
        metric: &str,
        value: Value,
    ) -> Result<UserRecord, UserRecordServiceError> {
        let mut record = self.get(id).await?;
        record.stats_mut().record(date, metric, value);
        let stored = self.records.update(record).await?;
        debug!(user_id = %id, date, metric, "daily metric recorded");
        Ok(stored)
    }

    /// Presentation view of a record.
    pub async fn summary(&self, id: UserRecordId) -> Result<UserRecordView, UserRecordServiceError> {
        let record = self.get(id).await?;
        Ok(UserRecordView::from(&record))
    }
}
