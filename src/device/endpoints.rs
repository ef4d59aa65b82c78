use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Device, DeviceId, DeviceStatus};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RegisterDeviceBody {
    pub device_id: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeviceBody {
    pub id: DeviceId,
    pub device_id: String,
    pub name: String,
    pub status: DeviceStatus,
    pub location: String,
    pub earnings: f64,
    pub impressions: i64,
    pub uptime: String,
}

impl DeviceBody {
    pub fn render(device: Device) -> DeviceBody {
        DeviceBody {
            id: device.id,
            device_id: device.device_id,
            name: device.name,
            status: device.status,
            location: device.location,
            earnings: device.earnings,
            impressions: device.impressions,
            uptime: device.uptime,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeviceEarningsBody {
    pub id: DeviceId,
    pub device_id: String,
    pub earnings: f64,
    pub impressions: i64,
}

#[get("/api/devices")]
#[tracing::instrument(skip(db))]
async fn get_devices(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<DeviceBody>>, Error> {
    let devices = manager::get_devices(&***db).await?;

    let body = devices.into_iter().map(DeviceBody::render).collect();

    Ok(Json(body))
}

#[post("/api/devices/register")]
#[tracing::instrument(skip(db))]
async fn register_device(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
    body: Json<RegisterDeviceBody>,
) -> Result<Json<DeviceBody>, Error> {
    let body = body.into_inner();

    let device = manager::register_device(&***db, body.device_id, body.name, body.location).await?;

    Ok(Json(DeviceBody::render(device)))
}

#[get("/api/devices/{device_id}/earnings")]
#[tracing::instrument(skip(db))]
async fn get_device_earnings(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
    params: Path<DeviceId>,
) -> Result<Json<DeviceEarningsBody>, Error> {
    let device_id = params.into_inner();

    let device = manager::get_device_by_id(&***db, device_id).await?;

    Ok(Json(DeviceEarningsBody {
        id: device.id,
        device_id: device.device_id,
        earnings: device.earnings,
        impressions: device.impressions,
    }))
}
