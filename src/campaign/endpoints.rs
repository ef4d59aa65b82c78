use actix_web::web::{Data, Json};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::error::Error;

use super::{manager, Campaign, CampaignId, CampaignStatus};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateCampaignBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub budget: f64,
    #[serde(default = "default_duration")]
    pub duration: i32,
}

fn default_duration() -> i32 {
    30
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignBody {
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

impl CampaignBody {
    pub fn render(campaign: Campaign) -> CampaignBody {
        CampaignBody {
            id: campaign.id,
            name: campaign.name,
            description: campaign.description,
            budget: campaign.budget,
            spent: campaign.spent,
            views: campaign.views,
            reach: campaign.reach,
            impressions: campaign.impressions,
            duration: campaign.duration,
            status: campaign.status,
            created_at: campaign.created_at,
        }
    }
}

#[post("/api/campaigns")]
#[tracing::instrument(skip(db))]
async fn create_campaign(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let campaign = manager::create_campaign(
        &***db,
        body.name,
        body.description,
        body.budget,
        body.duration,
    )
    .await?;

    Ok(Json(CampaignBody::render(campaign)))
}

#[get("/api/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(&***db).await?;

    let body = campaigns.into_iter().map(CampaignBody::render).collect();

    Ok(Json(body))
}
