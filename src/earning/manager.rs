use crate::database::Database;
use crate::error::Error;

use super::EarningsRecord;

#[tracing::instrument(skip(db))]
pub async fn get_earnings(db: &dyn Database) -> Result<Vec<EarningsRecord>, Error> {
    let earnings = db.earnings().fetch_earnings().await?;

    Ok(earnings)
}
