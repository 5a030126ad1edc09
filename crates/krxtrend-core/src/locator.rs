//! Backward search for the most recent date covered by both datasets.

use tracing::debug;

use crate::domain::{StockCode, TradeDate};
use crate::error::AnalysisError;
use crate::http::{self, HttpClient};
use crate::locations::DataLocations;

/// Locate the most recent date, starting today, for which the ranking table
/// and the price history both exist.
///
/// Walks backward one calendar day at a time for up to `window_days` probe
/// pairs. A date is accepted only when both documents exist; an existing
/// ranking table without a matching price file (or vice versa) is rejected
/// and the walk continues. The probes tolerate publication lag and market
/// holidays without a trading calendar.
pub async fn locate(
    client: &dyn HttpClient,
    locations: &DataLocations,
    code: &StockCode,
    name: &str,
    window_days: u32,
) -> Result<TradeDate, AnalysisError> {
    locate_from(
        client,
        locations,
        code,
        name,
        window_days,
        TradeDate::today_utc(),
    )
    .await
}

/// [`locate`] with an explicit anchor date (inclusive), for deterministic
/// tests.
pub async fn locate_from(
    client: &dyn HttpClient,
    locations: &DataLocations,
    code: &StockCode,
    name: &str,
    window_days: u32,
    start: TradeDate,
) -> Result<TradeDate, AnalysisError> {
    let mut date = start;

    for _ in 0..window_days {
        let rank_url = locations.rank_document(date);
        let price_url = locations.price_document(date, code, name);

        let rank_exists = http::exists(client, &rank_url).await?;
        let price_exists = http::exists(client, &price_url).await?;
        debug!(%date, rank_exists, price_exists, "probed dataset pair");

        if rank_exists && price_exists {
            return Ok(date);
        }

        date = date.pred();
    }

    Err(AnalysisError::AllDatesExhausted { window_days })
}
