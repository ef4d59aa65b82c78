use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type MicrotiserId = TypedId<Microtiser>;

/// A device owner monetizing display space. The collection is
/// read-only scaffolding: there is no registration endpoint yet, so it
/// stays empty until one exists.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Microtiser {
    pub id: MicrotiserId,
    pub name: String,
    pub email: String,
    pub device_count: i32,
    pub total_earnings: f64,
    pub joined_at: DateTime<Utc>,
}

impl TypedIdMarker for Microtiser {
    fn tag() -> &'static str {
        "MCT"
    }
}
