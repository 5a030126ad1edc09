//! Canonical domain types for the trend-template pipeline.
//!
//! All types validate their invariants at construction and are immutable
//! afterwards.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`StockCode`] | Validated six-digit KRX issue code |
//! | [`TradeDate`] | Calendar date in the feeds' `YYYY-MM-DD` shape |
//! | [`Listing`], [`ListingTable`] | The immutable code/name reference table |
//! | [`PricePoint`], [`PriceSeries`] | Ordered daily close history |
//! | [`ChecklistItem`], [`ChecklistResult`] | The evaluated eight-point checklist |

mod checklist;
mod code;
mod date;
mod listing;
mod price;

pub use checklist::{ChecklistItem, ChecklistResult, CHECKLIST_LEN};
pub use code::StockCode;
pub use date::TradeDate;
pub use listing::{Listing, ListingTable};
pub use price::{PricePoint, PriceSeries};
