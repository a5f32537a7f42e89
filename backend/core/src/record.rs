use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Whether a product was past its expiry date at the moment it was parsed.
///
/// Computed once from the observation's own date fields and never refreshed
/// against a later "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Yes,
    No,
    #[serde(rename = "NA")]
    Na,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExpiryStatus::Yes => "Yes",
            ExpiryStatus::No => "No",
            ExpiryStatus::Na => "NA",
        };
        f.write_str(s)
    }
}

/// One parsed product entry from a single image analysis, pre-merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Brand name, trimmed, non-empty.
    pub brand: String,
    /// The accepted expiry-date surface string, preserved verbatim for display
    /// and for merge identity.
    pub expiry_date: String,
    /// Units of this product seen in the image.
    pub count: u64,
    pub expired: ExpiryStatus,
    /// Whole days until expiry; `None` when the date is unknown or already past.
    pub expected_lifespan_days: Option<i64>,
    /// Parse time, ISO-8601 with offset.
    pub timestamp: DateTime<Local>,
}

/// One persistent row in the running product table, post-merge.
///
/// Created on the first unmatched observation, mutated in place (count added,
/// timestamp refreshed) on every later match, never deleted within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// 1-based, assigned at first insertion, stable and dense in insertion order.
    pub sequence_number: u64,
    /// Refreshed on every merge that adds quantity to this record.
    pub timestamp: DateTime<Local>,
    pub brand: String,
    pub expiry_date: String,
    /// Cumulative count, monotonically non-decreasing via merges.
    pub count: u64,
    pub expired: ExpiryStatus,
    pub expected_lifespan_days: Option<i64>,
}

impl InventoryRecord {
    pub fn from_observation(obs: Observation, sequence_number: u64) -> Self {
        Self {
            sequence_number,
            timestamp: obs.timestamp,
            brand: obs.brand,
            expiry_date: obs.expiry_date,
            count: obs.count,
            expired: obs.expired,
            expected_lifespan_days: obs.expected_lifespan_days,
        }
    }
}

/// Render an optional day count the way the product table shows it.
pub fn lifespan_display(days: Option<i64>) -> String {
    match days {
        Some(d) => d.to_string(),
        None => "NA".to_string(),
    }
}
