use async_trait::async_trait;

use crate::database::MemoryDeviceStore;
use crate::error::Error;

use super::{Device, DeviceId};

#[async_trait]
pub trait DeviceStore: Send + Sync {
    async fn next_id(&self) -> Result<DeviceId, Error>;

    async fn insert_device(&self, device: &Device) -> Result<(), Error>;

    async fn fetch_devices(&self) -> Result<Vec<Device>, Error>;

    async fn fetch_device_by_id(&self, device_id: DeviceId) -> Result<Option<Device>, Error>;
}

#[async_trait]
impl DeviceStore for MemoryDeviceStore {
    #[tracing::instrument(skip(self))]
    async fn next_id(&self) -> Result<DeviceId, Error> {
        Ok(DeviceId::from(self.next_value()))
    }

    #[tracing::instrument(skip(self, device))]
    async fn insert_device(&self, device: &Device) -> Result<(), Error> {
        self.push(device.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_devices(&self) -> Result<Vec<Device>, Error> {
        self.all()
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_device_by_id(&self, device_id: DeviceId) -> Result<Option<Device>, Error> {
        self.find(|device| device.id == device_id)
    }
}
