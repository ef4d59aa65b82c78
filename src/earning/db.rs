use async_trait::async_trait;

use crate::database::MemoryEarningStore;
use crate::error::Error;

use super::EarningsRecord;

#[async_trait]
pub trait EarningStore: Send + Sync {
    async fn fetch_earnings(&self) -> Result<Vec<EarningsRecord>, Error>;
}

#[async_trait]
impl EarningStore for MemoryEarningStore {
    #[tracing::instrument(skip(self))]
    async fn fetch_earnings(&self) -> Result<Vec<EarningsRecord>, Error> {
        self.all()
    }
}
