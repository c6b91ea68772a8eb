//! Sample record seeding orchestration.
//!
//! Inserts [`UserRecord::sample_records`] through the record store port,
//! skipping any sample whose email is already registered so repeat runs are
//! harmless.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::UserRecord;
use crate::domain::ports::{UserRecordRepository, UserRecordRepositoryError};

/// Result of applying the sample records.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDataSeedOutcome {
    /// Records stored by this run, with their assigned identifiers.
    pub inserted: Vec<UserRecord>,
    /// Emails that were already present and left untouched.
    pub skipped: Vec<String>,
}

impl SampleDataSeedOutcome {
    /// Whether every sample was already present.
    pub fn already_seeded(&self) -> bool {
        self.inserted.is_empty()
    }
}

/// Errors raised while applying sample records.
#[derive(Debug, Error)]
pub enum SampleDataSeedingError {
    /// Persistence adapter failed while seeding.
    #[error("sample data persistence error: {0}")]
    Persistence(#[from] UserRecordRepositoryError),
}

/// Service that stores the fixed sample records.
#[derive(Clone)]
pub struct SampleDataSeeder<R> {
    repository: Arc<R>,
}

impl<R> SampleDataSeeder<R> {
    /// Create a new seeder with the given persistence adapter.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> SampleDataSeeder<R>
where
    R: UserRecordRepository,
{
    /// Insert every sample record not yet present.
    ///
    /// # Errors
    ///
    /// Returns [`SampleDataSeedingError`] if the store fails. Records inserted
    /// before the failure stay stored.
    pub async fn seed(&self) -> Result<SampleDataSeedOutcome, SampleDataSeedingError> {
        let mut outcome = SampleDataSeedOutcome {
            inserted: Vec::new(),
            skipped: Vec::new(),
        };

        for record in UserRecord::sample_records() {
            if self.repository.find_by_email(record.email()).await?.is_some() {
                debug!(email = %record.email(), "sample record already present");
                outcome.skipped.push(record.email().to_owned());
                continue;
            }
            match self.repository.insert(record).await {
                Ok(stored) => outcome.inserted.push(stored),
                // Lost a race with a concurrent writer; treat as present.
                Err(UserRecordRepositoryError::EmailTaken { email }) => outcome.skipped.push(email),
                Err(err) => return Err(err.into()),
            }
        }

        Ok(outcome)
    }
}
