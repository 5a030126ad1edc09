use serde::{Deserialize, Serialize};

use crate::domain::{StockCode, TradeDate};
use crate::error::ValidationError;

/// One daily observation of a security's closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: TradeDate,
    pub close: f64,
}

/// Ordered daily price history, oldest first.
///
/// At least 200 trailing points are needed for the longest moving average
/// and 252 for a full 52-week window; shorter histories degrade specific
/// checks rather than failing the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    code: StockCode,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Construct a series, validating strictly ascending dates.
    pub fn new(code: StockCode, points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[0].date >= pair[1].date {
                return Err(ValidationError::UnorderedSeries { index: index + 1 });
            }
        }

        Ok(Self { code, points })
    }

    pub fn code(&self) -> &StockCode {
        &self.code
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.close).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint {
            date: TradeDate::parse(date).expect("valid date"),
            close,
        }
    }

    fn code() -> StockCode {
        StockCode::parse("005930").expect("valid code")
    }

    #[test]
    fn accepts_ascending_series() {
        let series = PriceSeries::new(
            code(),
            vec![point("2025-07-16", 100.0), point("2025-07-17", 101.0)],
        )
        .expect("series should build");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.0, 101.0]);
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let err = PriceSeries::new(
            code(),
            vec![point("2025-07-17", 100.0), point("2025-07-16", 101.0)],
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::UnorderedSeries { index: 1 }));
    }

    #[test]
    fn rejects_duplicate_dates() {
        let err = PriceSeries::new(
            code(),
            vec![point("2025-07-17", 100.0), point("2025-07-17", 101.0)],
        )
        .expect_err("must fail");
        assert!(matches!(err, ValidationError::UnorderedSeries { .. }));
    }

    #[test]
    fn allows_empty_series_for_engine_to_reject() {
        let series = PriceSeries::new(code(), Vec::new()).expect("empty series should build");
        assert!(series.is_empty());
        assert!(series.last().is_none());
    }
}
