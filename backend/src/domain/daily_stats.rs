//! Per-day, per-metric statistics attached to a user record.
//!
//! The map is stored as a semi-structured document:
//!
//! ```json
//! {
//!   "2022-11-13": { "calories": 2200, "steps": 8000 }
//! }
//! ```
//!
//! Keys are free-form strings at both levels; leaf values are arbitrary JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metrics recorded for a single day, keyed by metric name.
pub type DayMetrics = BTreeMap<String, Value>;

/// Statistics keyed by date, then by metric name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyStats(BTreeMap<String, DayMetrics>);

impl DailyStats {
    /// Create an empty stats map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `metric` for `date`, returning the value it replaced.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use usr_backend::domain::DailyStats;
    ///
    /// let mut stats = DailyStats::new();
    /// stats.record("2022-11-13", "steps", json!(8000));
    /// assert_eq!(stats.metric("2022-11-13", "steps"), Some(&json!(8000)));
    /// ```
    pub fn record(
        &mut self,
        date: impl Into<String>,
        metric: impl Into<String>,
        value: Value,
    ) -> Option<Value> {
        self.0
            .entry(date.into())
            .or_default()
            .insert(metric.into(), value)
    }

    /// All metrics recorded for `date`.
    pub fn day(&self, date: &str) -> Option<&DayMetrics> {
        self.0.get(date)
    }

    /// A single metric for `date`.
    pub fn metric(&self, date: &str, metric: &str) -> Option<&Value> {
        self.0.get(date).and_then(|metrics| metrics.get(metric))
    }

    /// Remove every metric recorded for `date`.
    pub fn remove_day(&mut self, date: &str) -> Option<DayMetrics> {
        self.0.remove(date)
    }

    /// Number of days with at least one entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no day has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over days in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayMetrics)> {
        self.0.iter().map(|(date, metrics)| (date.as_str(), metrics))
    }
}

impl From<BTreeMap<String, DayMetrics>> for DailyStats {
    fn from(value: BTreeMap<String, DayMetrics>) -> Self {
        Self(value)
    }
}
