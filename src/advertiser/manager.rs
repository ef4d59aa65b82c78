use crate::database::Database;
use crate::error::Error;

use super::Advertiser;

#[tracing::instrument(skip(db))]
pub async fn get_advertisers(db: &dyn Database) -> Result<Vec<Advertiser>, Error> {
    let advertisers = db.advertisers().fetch_advertisers().await?;

    Ok(advertisers)
}
