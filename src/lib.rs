use actix_files::Files;
use actix_web::web::{self, Data, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use tracing::info;
use tracing_actix_web::TracingLogger;

pub mod advertiser;
pub mod analytics;
pub mod auth;
pub mod campaign;
pub mod config;
pub mod database;
pub mod device;
pub mod earning;
pub mod error;
pub mod health;
pub mod microtiser;
pub mod pages;
pub mod seed;
pub mod typedid;
pub mod upload;

pub use auth::{LoginBody, TokenBody};
pub use campaign::{CampaignBody, CreateCampaignBody};
pub use config::Config;
pub use device::{DeviceBody, DeviceEarningsBody, RegisterDeviceBody};
pub use error::Error;

use crate::auth::TokenKeys;
use crate::database::{Database, MemoryDatabase};

#[actix_web::main]
pub async fn run(config: Config, seed_data: bool) -> Result<(), Error> {
    let db = MemoryDatabase::new();
    if seed_data {
        seed::seed(&db).await?;
    }

    std::fs::create_dir_all(&config.video_dir)?;
    std::fs::create_dir_all(&config.thumbnail_dir)?;

    let keys = Data::new(TokenKeys::from_secret(config.jwt_secret.as_bytes()));
    let bind_address = (config.host.clone(), config.port);
    let static_dir = config.static_dir.clone();
    let config = Data::new(config);

    info!("server listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .app_data(config.clone())
            .app_data(keys.clone())
            .wrap(TracingLogger::default())
            .service(auth::endpoints::login)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::create_campaign)
            .service(upload::endpoints::upload_campaign_video)
            .service(device::endpoints::get_devices)
            .service(device::endpoints::register_device)
            .service(device::endpoints::get_device_earnings)
            .service(analytics::endpoints::get_analytics)
            .service(microtiser::endpoints::get_microtisers)
            .service(advertiser::endpoints::get_advertisers)
            .service(earning::endpoints::get_earnings)
            .service(health::health_check)
            .service(pages::index)
            .service(pages::home)
            .service(pages::campaigns)
            .service(pages::devices)
            .service(pages::analytics)
            .service(pages::earnings)
            .service(pages::microtisers)
            .service(pages::advertisers)
            .service(Files::new("/static", static_dir.clone()))
            .default_service(web::to(|| async { Error::PathNotFound.error_response() }))
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
