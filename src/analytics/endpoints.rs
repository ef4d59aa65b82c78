use actix_web::get;
use actix_web::web::{Data, Json};

use crate::auth::AuthenticatedUser;
use crate::database::Database;
use crate::error::Error;

use super::{manager, AnalyticsSummary};

#[get("/api/analytics")]
#[tracing::instrument(skip(db))]
async fn get_analytics(
    db: Data<Box<dyn Database>>,
    user: AuthenticatedUser,
) -> Result<Json<AnalyticsSummary>, Error> {
    let summary = manager::get_analytics(&***db).await?;

    Ok(Json(summary))
}
