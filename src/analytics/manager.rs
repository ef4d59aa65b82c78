use crate::campaign::CampaignStatus;
use crate::database::Database;
use crate::device::DeviceStatus;
use crate::error::Error;

use super::AnalyticsSummary;

#[tracing::instrument(skip(db))]
pub async fn get_analytics(db: &dyn Database) -> Result<AnalyticsSummary, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;
    let devices = db.devices().fetch_devices().await?;

    Ok(AnalyticsSummary {
        total_campaigns: campaigns.len() as i64,
        active_campaigns: campaigns
            .iter()
            .filter(|campaign| campaign.status == CampaignStatus::Active)
            .count() as i64,
        total_devices: devices.len() as i64,
        active_devices: devices
            .iter()
            .filter(|device| device.status == DeviceStatus::Active)
            .count() as i64,
        total_impressions: campaigns.iter().map(|campaign| campaign.impressions).sum(),
        total_spent: campaigns.iter().map(|campaign| campaign.spent).sum(),
        total_earnings: devices.iter().map(|device| device.earnings).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{Campaign, CampaignId};
    use crate::database::test::MockDatabase;
    use crate::device::{Device, DeviceId};
    use chrono::Utc;

    fn campaign(id: i64, status: CampaignStatus, impressions: i64, spent: f64) -> Campaign {
        Campaign {
            id: CampaignId::from(id),
            name: format!("Campaign {}", id),
            description: String::new(),
            budget: 100.0,
            spent,
            views: 0,
            reach: 0,
            impressions,
            duration: 30,
            status,
            created_at: Utc::now(),
        }
    }

    fn device(id: i64, status: DeviceStatus, earnings: f64) -> Device {
        Device {
            id: DeviceId::from(id),
            device_id: format!("DEVICE{:03}", id),
            name: "Display".to_string(),
            status,
            location: "Unknown".to_string(),
            earnings,
            impressions: 0,
            uptime: "100%".to_string(),
        }
    }

    #[tokio::test]
    async fn totals_match_collection_state() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaigns = Box::new(|| {
            Ok(vec![
                campaign(1, CampaignStatus::Active, 100, 12.5),
                campaign(2, CampaignStatus::Paused, 50, 7.5),
                campaign(3, CampaignStatus::Active, 25, 0.0),
            ])
        });
        db.devices.on_fetch_devices = Box::new(|| {
            Ok(vec![
                device(1, DeviceStatus::Active, 3.25),
                device(2, DeviceStatus::Offline, 1.75),
            ])
        });

        let summary = get_analytics(&db).await.unwrap();

        assert_eq!(summary.total_campaigns, 3);
        assert_eq!(summary.active_campaigns, 2);
        assert_eq!(summary.total_devices, 2);
        assert_eq!(summary.active_devices, 1);
        assert_eq!(summary.total_impressions, 175);
        assert_eq!(summary.total_spent, 20.0);
        assert_eq!(summary.total_earnings, 5.0);
    }

    #[tokio::test]
    async fn totals_are_zero_for_empty_collections() {
        let mut db = MockDatabase::new();
        db.campaigns.on_fetch_campaigns = Box::new(|| Ok(vec![]));
        db.devices.on_fetch_devices = Box::new(|| Ok(vec![]));

        let summary = get_analytics(&db).await.unwrap();

        assert_eq!(summary.total_campaigns, 0);
        assert_eq!(summary.total_devices, 0);
        assert_eq!(summary.total_impressions, 0);
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.total_earnings, 0.0);
    }
}
