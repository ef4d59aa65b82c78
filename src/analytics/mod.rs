use serde::{Deserialize, Serialize};

pub mod endpoints;
pub mod manager;
pub use endpoints::*;

/// Totals over the current collection state. Recomputed on every
/// request; nothing is cached.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnalyticsSummary {
    pub total_campaigns: i64,
    pub active_campaigns: i64,
    pub total_devices: i64,
    pub active_devices: i64,
    pub total_impressions: i64,
    pub total_spent: f64,
    pub total_earnings: f64,
}
