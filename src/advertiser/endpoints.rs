use actix_web::get;
use actix_web::web::{Data, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Advertiser, AdvertiserId};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdvertiserBody {
    pub id: AdvertiserId,
    pub name: String,
    pub email: String,
    pub campaign_count: i32,
    pub total_spent: f64,
    pub joined_at: DateTime<Utc>,
}

impl AdvertiserBody {
    pub fn render(advertiser: Advertiser) -> AdvertiserBody {
        AdvertiserBody {
            id: advertiser.id,
            name: advertiser.name,
            email: advertiser.email,
            campaign_count: advertiser.campaign_count,
            total_spent: advertiser.total_spent,
            joined_at: advertiser.joined_at,
        }
    }
}

#[get("/api/advertisers")]
#[tracing::instrument(skip(db))]
async fn get_advertisers(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<AdvertiserBody>>, Error> {
    let advertisers = manager::get_advertisers(&***db).await?;

    let body = advertisers.into_iter().map(AdvertiserBody::render).collect();

    Ok(Json(body))
}
