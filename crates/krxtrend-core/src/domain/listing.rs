use serde::{Deserialize, Serialize};

use crate::domain::StockCode;
use crate::error::AnalysisError;

/// One row of the reference table: a canonical (code, name) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub code: StockCode,
    pub name: String,
}

/// The immutable code/name reference table.
///
/// Loaded once at startup and shared read-only afterwards; safe for
/// unsynchronized concurrent reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingTable {
    entries: Vec<Listing>,
}

/// Raw listing-feed row. Extra feed columns are ignored.
#[derive(Debug, Deserialize)]
struct ListingRow {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Name")]
    name: String,
}

impl ListingTable {
    pub fn new(entries: Vec<Listing>) -> Self {
        Self { entries }
    }

    /// Parse the listing CSV feed.
    ///
    /// Rows with an unparsable code or an empty name are dropped; the feed
    /// carries delisted and placeholder rows that must not poison lookups.
    pub fn from_csv(text: &str) -> Result<Self, AnalysisError> {
        let mut reader = csv::Reader::from_reader(text.as_bytes());
        let mut entries = Vec::new();

        for row in reader.deserialize::<ListingRow>() {
            let row = row.map_err(|e| AnalysisError::Malformed {
                what: "listing table",
                detail: e.to_string(),
            })?;

            let name = row.name.trim();
            let Ok(code) = StockCode::parse(&row.code) else {
                continue;
            };
            if name.is_empty() {
                continue;
            }

            entries.push(Listing {
                code,
                name: name.to_owned(),
            });
        }

        Ok(Self::new(entries))
    }

    /// Exact-match lookup by code.
    pub fn find_code(&self, code: &StockCode) -> Option<&Listing> {
        self.entries.iter().find(|listing| &listing.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
