use actix_web::get;
use actix_web::web::{Data, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Microtiser, MicrotiserId};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MicrotiserBody {
    pub id: MicrotiserId,
    pub name: String,
    pub email: String,
    pub device_count: i32,
    pub total_earnings: f64,
    pub joined_at: DateTime<Utc>,
}

impl MicrotiserBody {
    pub fn render(microtiser: Microtiser) -> MicrotiserBody {
        MicrotiserBody {
            id: microtiser.id,
            name: microtiser.name,
            email: microtiser.email,
            device_count: microtiser.device_count,
            total_earnings: microtiser.total_earnings,
            joined_at: microtiser.joined_at,
        }
    }
}

#[get("/api/microtisers")]
#[tracing::instrument(skip(db))]
async fn get_microtisers(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<MicrotiserBody>>, Error> {
    let microtisers = manager::get_microtisers(&***db).await?;

    let body = microtisers.into_iter().map(MicrotiserBody::render).collect();

    Ok(Json(body))
}
