//! JSON document helpers for persisted stats.
//!
//! Stats are stored as an opaque document (`serde_json::Value`) and decoded
//! back through the domain type so malformed documents surface as typed
//! errors rather than silent data loss.

use serde_json::Value;

use crate::domain::DailyStats;

pub(super) fn daily_stats_to_json(stats: &DailyStats) -> Result<Value, String> {
    serde_json::to_value(stats).map_err(|e| format!("stats encode: {e}"))
}

/// Decode a stored stats document.
///
/// Accepts the [`Value`] by value so `serde_json::from_value` can consume it
/// directly.
pub(super) fn json_to_daily_stats(value: Value) -> Result<DailyStats, String> {
    serde_json::from_value(value).map_err(|e| format!("stats decode: {e}"))
}
