use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type DeviceId = TypedId<Device>;

/// A physical display unit that shows campaigns and accrues earnings.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Device {
    pub id: DeviceId,
    pub device_id: String,
    pub name: String,
    pub status: DeviceStatus,
    pub location: String,
    pub earnings: f64,
    pub impressions: i64,
    pub uptime: String,
}

impl TypedIdMarker for Device {
    fn tag() -> &'static str {
        "DEV"
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    Active,
    Offline,
}
