use crate::domain::{StockCode, TradeDate};

/// Base locations of the three external datasets.
///
/// URL construction for every feed document lives here and nowhere else;
/// the defaults point at the published dalinaum/rs mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLocations {
    /// Listing table CSV (the code/name reference table).
    pub listing_url: String,
    /// Directory of per-date markdown posts (rank and trend-template tables).
    pub post_base: String,
    /// Directory of per-date price history CSVs.
    pub price_base: String,
}

impl Default for DataLocations {
    fn default() -> Self {
        Self {
            listing_url: String::from(
                "https://raw.githubusercontent.com/dalinaum/rs/main/krx-list.csv",
            ),
            post_base: String::from(
                "https://raw.githubusercontent.com/dalinaum/rs/main/docs/_posts",
            ),
            price_base: String::from("https://raw.githubusercontent.com/dalinaum/rs/main/DATA"),
        }
    }
}

impl DataLocations {
    pub fn listing(&self) -> &str {
        &self.listing_url
    }

    /// The relative-strength ranking table for a date.
    pub fn rank_document(&self, date: TradeDate) -> String {
        format!("{}/{date}-krx-rs.markdown", self.post_base)
    }

    /// The published trend-template result list for a date (batch path).
    pub fn trend_list_document(&self, date: TradeDate) -> String {
        format!("{}/{date}-krx-trend-template.markdown", self.post_base)
    }

    /// One security's daily price history as of a date.
    pub fn price_document(&self, date: TradeDate, code: &StockCode, name: &str) -> String {
        format!("{}/{date}/{code}-{name}.csv", self.price_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_feed_urls_from_bases() {
        let locations = DataLocations {
            listing_url: String::from("https://mirror.test/krx-list.csv"),
            post_base: String::from("https://mirror.test/posts"),
            price_base: String::from("https://mirror.test/data"),
        };
        let date = TradeDate::parse("2025-07-18").expect("valid date");
        let code = StockCode::parse("005930").expect("valid code");

        assert_eq!(
            locations.rank_document(date),
            "https://mirror.test/posts/2025-07-18-krx-rs.markdown"
        );
        assert_eq!(
            locations.trend_list_document(date),
            "https://mirror.test/posts/2025-07-18-krx-trend-template.markdown"
        );
        assert_eq!(
            locations.price_document(date, &code, "삼성전자"),
            "https://mirror.test/data/2025-07-18/005930-삼성전자.csv"
        );
    }
}
