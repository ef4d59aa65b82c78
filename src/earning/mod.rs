use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::device::DeviceId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type EarningsRecordId = TypedId<EarningsRecord>;

/// A historical payout entry for a device. Nothing writes these yet;
/// the history endpoint exposes whatever the collection holds.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EarningsRecord {
    pub id: EarningsRecordId,
    pub device_id: DeviceId,
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

impl TypedIdMarker for EarningsRecord {
    fn tag() -> &'static str {
        "ERN"
    }
}
