//! Read-only projection of a user record for presentation.

use serde::{Deserialize, Serialize};

use super::daily_stats::DailyStats;
use super::user::{UserRecord, UserRecordId};

/// What the presentation layer sees of a record.
///
/// Carries the derived average alongside the stored aggregates and leaves
/// the password out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordView {
    /// Storage identifier, absent for unsaved records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserRecordId>,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Best single-game score.
    pub high_score: f64,
    /// Sum of every recorded score.
    pub total_of_all_scores: f64,
    /// Number of games played.
    pub number_of_scores: u32,
    /// Guarded average, see [`UserRecord::average_score`].
    pub average_score: f64,
    /// Names of the roles held.
    pub roles: Vec<String>,
    /// Daily statistics document.
    pub stats: DailyStats,
}

impl From<&UserRecord> for UserRecordView {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id(),
            email: record.email().to_owned(),
            name: record.name().to_owned(),
            high_score: record.high_score(),
            total_of_all_scores: record.total_of_all_scores(),
            number_of_scores: record.number_of_scores(),
            average_score: record.average_score(),
            roles: record
                .roles()
                .iter()
                .map(|role| role.name().to_string())
                .collect(),
            stats: record.stats().clone(),
        }
    }
}
