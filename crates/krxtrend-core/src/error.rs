use thiserror::Error;

use crate::domain::{StockCode, TradeDate};
use crate::http::HttpError;

/// Domain-type construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("stock code must not be empty")]
    EmptyCode,

    #[error("stock code '{value}' contains a non-digit character")]
    CodeNotNumeric { value: String },

    #[error("stock code '{value}' is longer than {max} digits")]
    CodeTooLong { value: String, max: usize },

    #[error("'{value}' is not a valid YYYY-MM-DD calendar date")]
    InvalidDate { value: String },

    #[error("price series dates must be strictly ascending (violated at index {index})")]
    UnorderedSeries { index: usize },
}

/// Failure taxonomy for the analysis pipeline.
///
/// None of these are retried inside the core; the locator's date walk is a
/// search over candidates, not a retry of a failed request. Variants carry a
/// short context string only; user-facing prose belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("no listed security matches input '{input}'")]
    IdentifierNotFound { input: String },

    #[error("no date within the last {window_days} days has both rank and price data")]
    AllDatesExhausted { window_days: u32 },

    #[error("document not found: {url}")]
    ResourceNotFound { url: String },

    #[error("code {code} is not present in the ranking table for {date}")]
    RankNotPresent { code: StockCode, date: TradeDate },

    #[error("price history has {len} points, need at least {required}")]
    InsufficientHistory { len: usize, required: usize },

    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] HttpError),
}
