//! Domain primitives, services, and ports.
//!
//! Purpose: Define the user record entity, its validation rules, and the
//! use-cases that coordinate it with storage. Adapters live in
//! [`crate::outbound`]; nothing here depends on them.
//!
//! Public surface:
//! - UserRecord: account fields, score aggregates, roles, daily stats.
//! - guarded_average: the derived average-score rule.
//! - validate_email / validate_password / validate_name: field checks.
//! - UserRecordService: validated registration and updates.
//! - SampleDataSeeder: stores the fixed sample records.

pub mod daily_stats;
pub mod ports;
pub mod role;
pub mod sample_data;
pub mod score;
pub mod user;
pub mod user_service;
pub mod user_validation;
pub mod user_view;

pub use self::daily_stats::{DailyStats, DayMetrics};
pub use self::role::{Role, RoleId, RoleName, RoleValidationError};
pub use self::sample_data::{SampleDataSeedOutcome, SampleDataSeeder, SampleDataSeedingError};
pub use self::score::{PER_GAME_THRESHOLD, guarded_average};
pub use self::user::{Password, UserRecord, UserRecordId};
pub use self::user_service::{UserRecordService, UserRecordServiceError};
pub use self::user_validation::{
    EMAIL_MIN, NAME_MAX, NAME_MIN, UserValidationError, validate_email, validate_name,
    validate_password,
};
pub use self::user_view::UserRecordView;
