//! Single entry point tying the pipeline together.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{ChecklistResult, Listing, ListingTable, TradeDate};
use crate::error::AnalysisError;
use crate::http::{self, HttpClient};
use crate::locations::DataLocations;
use crate::{engine, locator, prices, rank, report, resolver};

/// Everything the presentation layers consume: the resolved listing and the
/// evaluated checklist (which carries the reference date and rank score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub listing: Listing,
    pub checklist: ChecklistResult,
}

impl AnalysisReport {
    /// Render the pass/fail report text.
    pub fn render(&self) -> String {
        report::format_report(&self.listing.name, &self.checklist)
    }
}

/// Fetch and parse the reference table. Called once at startup; the result
/// is immutable and shared read-only across queries.
pub async fn fetch_listing(
    client: &dyn HttpClient,
    locations: &DataLocations,
) -> Result<ListingTable, AnalysisError> {
    let body = http::fetch_text(client, locations.listing_url.clone()).await?;
    let table = ListingTable::from_csv(&body)?;
    info!(entries = table.len(), "loaded listing table");
    Ok(table)
}

/// The analysis pipeline: resolve, locate, fetch, evaluate.
///
/// Each query runs strictly sequentially over its own data; the only shared
/// state is the read-only listing table. Independent queries need no
/// coordination.
pub struct Analyzer {
    client: Arc<dyn HttpClient>,
    locations: DataLocations,
    listing: ListingTable,
}

impl Analyzer {
    /// Lookback bound of the interactive path, in calendar days.
    pub const DEFAULT_WINDOW_DAYS: u32 = 30;

    pub fn new(client: Arc<dyn HttpClient>, locations: DataLocations, listing: ListingTable) -> Self {
        Self {
            client,
            locations,
            listing,
        }
    }

    pub fn listing(&self) -> &ListingTable {
        &self.listing
    }

    pub fn locations(&self) -> &DataLocations {
        &self.locations
    }

    /// Resolve free-text input against the reference table.
    pub fn resolve(&self, input: &str) -> Option<Listing> {
        resolver::resolve(input, &self.listing)
    }

    /// Run the full pipeline with the default lookback window.
    pub async fn analyze(&self, input: &str) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_within(input, Self::DEFAULT_WINDOW_DAYS).await
    }

    /// Run the full pipeline with an explicit lookback window.
    pub async fn analyze_within(
        &self,
        input: &str,
        window_days: u32,
    ) -> Result<AnalysisReport, AnalysisError> {
        let listing = self
            .resolve(input)
            .ok_or_else(|| AnalysisError::IdentifierNotFound {
                input: input.to_owned(),
            })?;
        info!(code = %listing.code, name = %listing.name, "resolved input");

        let date = self.locate(&listing, window_days).await?;
        info!(%date, "located latest consistent snapshot");

        let rank = rank::fetch_rank(self.client.as_ref(), &self.locations, date, &listing.code)
            .await?;
        let series = prices::fetch_prices(
            self.client.as_ref(),
            &self.locations,
            date,
            &listing.code,
            &listing.name,
        )
        .await?;

        let checklist = engine::evaluate(&series, rank.score)?;
        Ok(AnalysisReport { listing, checklist })
    }

    async fn locate(&self, listing: &Listing, window_days: u32) -> Result<TradeDate, AnalysisError> {
        locator::locate(
            self.client.as_ref(),
            &self.locations,
            &listing.code,
            &listing.name,
            window_days,
        )
        .await
    }
}
