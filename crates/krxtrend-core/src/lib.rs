//! # krxtrend Core
//!
//! Domain types and pipeline for evaluating a KRX equity against the
//! eight-point trend-template checklist.
//!
//! ## Overview
//!
//! The pipeline resolves free-text input to a listed security, finds the
//! most recent date covered by both external datasets (a relative-strength
//! ranking table and a daily price history), extracts the security's rank,
//! loads its closes, evaluates the checklist, and renders a pass/fail
//! report.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`analyzer`] | `Analyzer` facade and the `analyze` entry point |
//! | [`daily`] | Batch path: published pass list diffed day over day |
//! | [`domain`] | Validated domain types (codes, dates, prices, checklist) |
//! | [`engine`] | Moving averages and the eight checklist conditions |
//! | [`error`] | Validation and analysis error taxonomies |
//! | [`http`] | Transport trait, reqwest client, offline fixture client |
//! | [`locations`] | Configurable base locations of the three feeds |
//! | [`locator`] | Backward search for a consistent dataset snapshot |
//! | [`prices`] | Price-history fetch and typed CSV parse |
//! | [`rank`] | Marker-based ranking-table parser |
//! | [`report`] | Plain-text report rendering |
//! | [`resolver`] | Free-text identifier resolution |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use krxtrend_core::{fetch_listing, Analyzer, DataLocations, ReqwestHttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(ReqwestHttpClient::new());
//!     let locations = DataLocations::default();
//!     let listing = fetch_listing(client.as_ref(), &locations).await?;
//!
//!     let analyzer = Analyzer::new(client, locations, listing);
//!     let report = analyzer.analyze("삼성전자").await?;
//!     println!("{}", report.render());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline operations return typed [`AnalysisError`] values; a security
//! that resolves to nothing is `None` from the resolver, not an error, and
//! nothing inside the core retries a failed fetch. The locator's backward
//! date walk is a search over candidates, which is how the core tolerates
//! publication lag in either feed without a trading calendar.

pub mod analyzer;
pub mod daily;
pub mod domain;
pub mod engine;
pub mod error;
pub mod http;
pub mod locations;
pub mod locator;
pub mod prices;
pub mod rank;
pub mod report;
pub mod resolver;

// Re-export commonly used types at crate root for convenience

pub use analyzer::{fetch_listing, AnalysisReport, Analyzer};
pub use daily::{daily_list, format_daily_list, DailyEntry, DailyList, TrendEntry};
pub use domain::{
    ChecklistItem, ChecklistResult, Listing, ListingTable, PricePoint, PriceSeries, StockCode,
    TradeDate, CHECKLIST_LEN,
};
pub use error::{AnalysisError, ValidationError};
pub use http::{
    FixtureHttpClient, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    ReqwestHttpClient,
};
pub use locations::DataLocations;
pub use rank::RankRecord;
pub use report::format_report;
pub use resolver::resolve;
