use crate::database::Database;
use crate::error::Error;

use super::{Device, DeviceId, DeviceStatus};

#[tracing::instrument(skip(db))]
pub async fn register_device(
    db: &dyn Database,
    device_id: Option<String>,
    name: Option<String>,
    location: Option<String>,
) -> Result<Device, Error> {
    let id = db.devices().next_id().await?;
    let device = Device {
        id,
        device_id: device_id.unwrap_or_else(|| format!("DEVICE{:03}", id.value())),
        name: name.unwrap_or_else(|| "New Device".to_string()),
        status: DeviceStatus::Active,
        location: location.unwrap_or_else(|| "Unknown".to_string()),
        earnings: 0.0,
        impressions: 0,
        uptime: "100%".to_string(),
    };

    db.devices().insert_device(&device).await?;

    Ok(device)
}

#[tracing::instrument(skip(db))]
pub async fn get_devices(db: &dyn Database) -> Result<Vec<Device>, Error> {
    let devices = db.devices().fetch_devices().await?;

    Ok(devices)
}

#[tracing::instrument(skip(db))]
pub async fn get_device_by_id(db: &dyn Database, device_id: DeviceId) -> Result<Device, Error> {
    let device = db
        .devices()
        .fetch_device_by_id(device_id)
        .await?
        .ok_or(Error::DeviceNotFound { device_id })?;

    Ok(device)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;
    use std::sync::{Arc, Mutex};

    fn sample_device(id: i64) -> Device {
        Device {
            id: DeviceId::from(id),
            device_id: format!("DEVICE{:03}", id),
            name: "Main Display".to_string(),
            status: DeviceStatus::Active,
            location: "New York, NY".to_string(),
            earnings: 12.5,
            impressions: 420,
            uptime: "99.9%".to_string(),
        }
    }

    #[tokio::test]
    async fn register_device_applies_defaults() {
        let mut db = MockDatabase::new();
        db.devices.on_next_id = Box::new(|| Ok(DeviceId::from(2)));
        let called_insert = Arc::new(Mutex::new(false));
        let called_insert_clone = Arc::clone(&called_insert);
        db.devices.on_insert_device = Box::new(move |device| {
            *called_insert_clone.lock().unwrap() = true;
            assert_eq!(device.device_id, "DEVICE002");
            assert_eq!(device.name, "New Device");
            assert_eq!(device.location, "Unknown");
            assert_eq!(device.status, DeviceStatus::Active);
            assert_eq!(device.earnings, 0.0);
            assert_eq!(device.impressions, 0);
            assert_eq!(device.uptime, "100%");
            Ok(())
        });

        let device = register_device(&db, None, None, None).await.unwrap();

        assert_eq!(device.id, DeviceId::from(2));
        assert_eq!(device.device_id, "DEVICE002");
        assert!(
            *called_insert.lock().unwrap(),
            "db.insert_device was not called"
        );
    }

    #[tokio::test]
    async fn register_device_keeps_caller_supplied_fields() {
        let mut db = MockDatabase::new();
        db.devices.on_next_id = Box::new(|| Ok(DeviceId::from(7)));
        db.devices.on_insert_device = Box::new(|_| Ok(()));

        let device = register_device(
            &db,
            Some("LOBBY-SCREEN".to_string()),
            Some("Lobby Screen".to_string()),
            Some("Austin, TX".to_string()),
        )
        .await
        .unwrap();

        assert_eq!(device.device_id, "LOBBY-SCREEN");
        assert_eq!(device.name, "Lobby Screen");
        assert_eq!(device.location, "Austin, TX");
    }

    #[tokio::test]
    async fn get_device_by_id_returns_device() {
        let mut db = MockDatabase::new();
        db.devices.on_fetch_device_by_id = Box::new(|device_id| {
            assert_eq!(device_id, DeviceId::from(1));
            Ok(Some(sample_device(1)))
        });

        let device = get_device_by_id(&db, DeviceId::from(1)).await.unwrap();

        assert_eq!(device.earnings, 12.5);
        assert_eq!(device.impressions, 420);
    }

    #[tokio::test]
    async fn get_device_by_id_returns_error_if_doesnt_exist() {
        let mut db = MockDatabase::new();
        db.devices.on_fetch_device_by_id = Box::new(|_| Ok(None));

        let device_result = get_device_by_id(&db, DeviceId::from(99)).await;

        assert_eq!(
            device_result.unwrap_err(),
            Error::DeviceNotFound {
                device_id: DeviceId::from(99)
            }
        );
    }
}
