use chrono::Utc;

use crate::campaign::{Campaign, CampaignStatus};
use crate::database::Database;
use crate::device::{Device, DeviceStatus};
use crate::error::Error;

pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    db.drop().await?;

    let campaign = Campaign {
        id: db.campaigns().next_id().await?,
        name: "Welcome Campaign".to_string(),
        description: "Your first micro-advertising campaign".to_string(),
        budget: 100.0,
        spent: 0.0,
        views: 0,
        reach: 0,
        impressions: 0,
        duration: 30,
        status: CampaignStatus::Active,
        created_at: Utc::now(),
    };
    db.campaigns().insert_campaign(&campaign).await?;

    let device = Device {
        id: db.devices().next_id().await?,
        device_id: "DEVICE001".to_string(),
        name: "Main Display".to_string(),
        status: DeviceStatus::Active,
        location: "New York, NY".to_string(),
        earnings: 0.0,
        impressions: 0,
        uptime: "99.9%".to_string(),
    };
    db.devices().insert_device(&device).await?;

    Ok(())
}
