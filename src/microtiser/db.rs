use async_trait::async_trait;

use crate::database::MemoryMicrotiserStore;
use crate::error::Error;

use super::Microtiser;

#[async_trait]
pub trait MicrotiserStore: Send + Sync {
    async fn fetch_microtisers(&self) -> Result<Vec<Microtiser>, Error>;
}

#[async_trait]
impl MicrotiserStore for MemoryMicrotiserStore {
    #[tracing::instrument(skip(self))]
    async fn fetch_microtisers(&self) -> Result<Vec<Microtiser>, Error> {
        self.all()
    }
}
