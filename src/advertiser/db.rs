use async_trait::async_trait;

use crate::database::MemoryAdvertiserStore;
use crate::error::Error;

use super::Advertiser;

#[async_trait]
pub trait AdvertiserStore: Send + Sync {
    async fn fetch_advertisers(&self) -> Result<Vec<Advertiser>, Error>;
}

#[async_trait]
impl AdvertiserStore for MemoryAdvertiserStore {
    #[tracing::instrument(skip(self))]
    async fn fetch_advertisers(&self) -> Result<Vec<Advertiser>, Error> {
        self.all()
    }
}
