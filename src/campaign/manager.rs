use chrono::Utc;

use crate::database::Database;
use crate::error::Error;

use super::{Campaign, CampaignStatus};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(
    db: &dyn Database,
    name: String,
    description: String,
    budget: f64,
    duration: i32,
) -> Result<Campaign, Error> {
    let campaign = Campaign {
        id: db.campaigns().next_id().await?,
        name,
        description,
        budget,
        spent: 0.0,
        views: 0,
        reach: 0,
        impressions: 0,
        duration,
        status: CampaignStatus::Active,
        created_at: Utc::now(),
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}
