use actix_web::get;
use actix_web::web::{Data, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::device::DeviceId;
use crate::error::Error;

use super::{manager, EarningsRecord, EarningsRecordId};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EarningsRecordBody {
    pub id: EarningsRecordId,
    pub device_id: DeviceId,
    pub amount: f64,
    pub recorded_at: DateTime<Utc>,
}

impl EarningsRecordBody {
    pub fn render(record: EarningsRecord) -> EarningsRecordBody {
        EarningsRecordBody {
            id: record.id,
            device_id: record.device_id,
            amount: record.amount,
            recorded_at: record.recorded_at,
        }
    }
}

#[get("/api/earnings")]
#[tracing::instrument(skip(db))]
async fn get_earnings(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<EarningsRecordBody>>, Error> {
    let earnings = manager::get_earnings(&***db).await?;

    let body = earnings
        .into_iter()
        .map(EarningsRecordBody::render)
        .collect();

    Ok(Json(body))
}
