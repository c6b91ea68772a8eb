//! Startup seeding orchestration.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::UserRecordRepository;
use crate::domain::{SampleDataSeedOutcome, SampleDataSeeder, SampleDataSeedingError};
use crate::sample_data::config::SampleDataSettings;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Seeding failed part way through.
    #[error("sample data seeding error: {0}")]
    Seeding(#[from] SampleDataSeedingError),
}

/// Apply the sample records on startup when enabled.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use usr_backend::outbound::persistence::InMemoryUserStore;
/// use usr_backend::sample_data::{SampleDataSettings, seed_sample_data_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = SampleDataSettings {
///     enabled: Some(false),
///     format: None,
/// };
/// let store = Arc::new(InMemoryUserStore::new());
/// let outcome = seed_sample_data_on_startup(&settings, store).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_sample_data_on_startup<R>(
    settings: &SampleDataSettings,
    repository: Arc<R>,
) -> Result<Option<SampleDataSeedOutcome>, StartupSeedingError>
where
    R: UserRecordRepository,
{
    if !settings.is_enabled() {
        info!(reason = "disabled", "sample data seeding skipped");
        return Ok(None);
    }

    let outcome = SampleDataSeeder::new(repository).seed().await?;
    if outcome.already_seeded() {
        info!(
            skipped = outcome.skipped.len(),
            "sample data already present; skipping"
        );
    } else {
        info!(
            inserted = outcome.inserted.len(),
            skipped = outcome.skipped.len(),
            "sample data seeding applied"
        );
    }

    Ok(Some(outcome))
}
