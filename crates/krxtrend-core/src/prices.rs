//! Per-security daily price history feed.

use serde::Deserialize;

use crate::domain::{PricePoint, PriceSeries, StockCode, TradeDate};
use crate::error::AnalysisError;
use crate::http::{self, HttpClient};
use crate::locations::DataLocations;

/// Raw price-feed row. Extra feed columns (open/high/low/volume/change) are
/// ignored; the checklist only consumes closes.
#[derive(Debug, Deserialize)]
struct PriceRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: f64,
}

/// Fetch one security's daily history as of `date`.
///
/// A straight tabular fetch: the document either exists and parses into a
/// typed series, or the query fails. No transformation beyond typed parsing.
pub async fn fetch_prices(
    client: &dyn HttpClient,
    locations: &DataLocations,
    date: TradeDate,
    code: &StockCode,
    name: &str,
) -> Result<PriceSeries, AnalysisError> {
    let url = locations.price_document(date, code, name);
    let body = http::fetch_text(client, url).await?;
    parse_prices(&body, code)
}

/// Parse the price CSV into an ordered series.
pub fn parse_prices(text: &str, code: &StockCode) -> Result<PriceSeries, AnalysisError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut points = Vec::new();

    for row in reader.deserialize::<PriceRow>() {
        let row = row.map_err(|e| AnalysisError::Malformed {
            what: "price history",
            detail: e.to_string(),
        })?;

        points.push(PricePoint {
            date: TradeDate::parse(&row.date)?,
            close: row.close,
        });
    }

    Ok(PriceSeries::new(code.clone(), points)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> StockCode {
        StockCode::parse("005930").expect("valid code")
    }

    #[test]
    fn parses_dates_and_closes_ignoring_other_columns() {
        let csv = "\
Date,Open,High,Low,Close,Volume,Change\n\
2025-07-17,70000,71500,69800,71000,1234567,0.01\n\
2025-07-18,71000,72000,70500,71800,2345678,0.011\n";

        let series = parse_prices(csv, &code()).expect("prices should parse");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![71000.0, 71800.0]);
        assert_eq!(
            series.last().expect("non-empty").date.format(),
            "2025-07-18"
        );
    }

    #[test]
    fn malformed_close_cell_is_an_error() {
        let csv = "Date,Close\n2025-07-18,notanumber\n";
        let err = parse_prices(csv, &code()).expect_err("must fail");
        assert!(matches!(
            err,
            AnalysisError::Malformed {
                what: "price history",
                ..
            }
        ));
    }

    #[test]
    fn out_of_order_feed_is_rejected() {
        let csv = "Date,Close\n2025-07-18,100\n2025-07-17,99\n";
        let err = parse_prices(csv, &code()).expect_err("must fail");
        assert!(matches!(err, AnalysisError::Validation(_)));
    }
}
