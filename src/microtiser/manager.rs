use crate::database::Database;
use crate::error::Error;

use super::Microtiser;

#[tracing::instrument(skip(db))]
pub async fn get_microtisers(db: &dyn Database) -> Result<Vec<Microtiser>, Error> {
    let microtisers = db.microtisers().fetch_microtisers().await?;

    Ok(microtisers)
}
