use async_trait::async_trait;

use crate::database::MemoryCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignId};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn next_id(&self) -> Result<CampaignId, Error>;

    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn next_id(&self) -> Result<CampaignId, Error> {
        Ok(CampaignId::from(self.next_value()))
    }

    #[tracing::instrument(skip(self, campaign))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.push(campaign.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        self.all()
    }
}
