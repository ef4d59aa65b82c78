use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type AdvertiserId = TypedId<Advertiser>;

/// An entity purchasing campaign placement. Listed but not manageable
/// through this surface; the collection stays empty.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Advertiser {
    pub id: AdvertiserId,
    pub name: String,
    pub email: String,
    pub campaign_count: i32,
    pub total_spent: f64,
    pub joined_at: DateTime<Utc>,
}

impl TypedIdMarker for Advertiser {
    fn tag() -> &'static str {
        "ADV"
    }
}
