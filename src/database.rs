use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::advertiser::db::AdvertiserStore;
use crate::advertiser::Advertiser;
use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::device::db::DeviceStore;
use crate::device::Device;
use crate::earning::db::EarningStore;
use crate::earning::EarningsRecord;
use crate::error::Error;
use crate::microtiser::db::MicrotiserStore;
use crate::microtiser::Microtiser;

pub type MemoryCampaignStore = MemoryCollection<Campaign>;
pub type MemoryDeviceStore = MemoryCollection<Device>;
pub type MemoryMicrotiserStore = MemoryCollection<Microtiser>;
pub type MemoryAdvertiserStore = MemoryCollection<Advertiser>;
pub type MemoryEarningStore = MemoryCollection<EarningsRecord>;

#[async_trait]
pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn devices(&self) -> &dyn DeviceStore;
    fn microtisers(&self) -> &dyn MicrotiserStore;
    fn advertisers(&self) -> &dyn AdvertiserStore;
    fn earnings(&self) -> &dyn EarningStore;
    async fn drop(&self) -> Result<(), Error>;
}

/// Process-lifetime list of records plus the counter that issues their
/// sequential ids. Ids start at 1 and are handed out atomically so
/// concurrent inserts cannot observe the same "next id".
pub struct MemoryCollection<T> {
    records: RwLock<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> MemoryCollection<T> {
        MemoryCollection {
            records: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(0),
        }
    }

    pub fn next_value(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn push(&self, record: T) -> Result<(), Error> {
        self.write()?.push(record);
        Ok(())
    }

    pub fn all(&self) -> Result<Vec<T>, Error> {
        Ok(self.read()?.clone())
    }

    pub fn find<F>(&self, predicate: F) -> Result<Option<T>, Error>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read()?.iter().find(|record| predicate(record)).cloned())
    }

    pub fn clear(&self) -> Result<(), Error> {
        self.write()?.clear();
        self.next_id.store(0, Ordering::SeqCst);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, Error> {
        self.records
            .read()
            .map_err(|_| Error::ExistentialState("collection lock was poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, Error> {
        self.records
            .write()
            .map_err(|_| Error::ExistentialState("collection lock was poisoned".to_string()))
    }
}

#[derive(Clone)]
pub struct MemoryDatabase {
    campaigns: Arc<MemoryCampaignStore>,
    devices: Arc<MemoryDeviceStore>,
    microtisers: Arc<MemoryMicrotiserStore>,
    advertisers: Arc<MemoryAdvertiserStore>,
    earnings: Arc<MemoryEarningStore>,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase {
            campaigns: Arc::new(MemoryCollection::new()),
            devices: Arc::new(MemoryCollection::new()),
            microtisers: Arc::new(MemoryCollection::new()),
            advertisers: Arc::new(MemoryCollection::new()),
            earnings: Arc::new(MemoryCollection::new()),
        }
    }
}

impl Default for MemoryDatabase {
    fn default() -> MemoryDatabase {
        MemoryDatabase::new()
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &*self.campaigns
    }

    fn devices(&self) -> &dyn DeviceStore {
        &*self.devices
    }

    fn microtisers(&self) -> &dyn MicrotiserStore {
        &*self.microtisers
    }

    fn advertisers(&self) -> &dyn AdvertiserStore {
        &*self.advertisers
    }

    fn earnings(&self) -> &dyn EarningStore {
        &*self.earnings
    }

    async fn drop(&self) -> Result<(), Error> {
        self.campaigns.clear()?;
        self.devices.clear()?;
        self.microtisers.clear()?;
        self.advertisers.clear()?;
        self.earnings.clear()?;
        Ok(())
    }
}
