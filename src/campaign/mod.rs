use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

/// An advertising run with a budget and performance metrics. Metrics
/// start zeroed and the status is never advanced by the server.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    pub description: String,
    pub budget: f64,
    pub spent: f64,
    pub views: i64,
    pub reach: i64,
    pub impressions: i64,
    pub duration: i32,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CPN"
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
}
