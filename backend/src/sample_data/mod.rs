//! Startup wiring for sample record seeding.

mod config;
mod startup;

pub use config::{OutputFormat, SampleDataSettings, SampleDataSettingsError};
pub use startup::{StartupSeedingError, seed_sample_data_on_startup};
