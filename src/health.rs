use actix_web::get;
use actix_web::web::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HealthBody {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[get("/health")]
async fn health_check() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
