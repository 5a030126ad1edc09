//! Marker-based parsing of the published ranking table.
//!
//! The feed is a markdown post with one embedded pipe-delimited table whose
//! header order drifts between publications. Columns are therefore located
//! by content marker, never by fixed position.

use serde::{Deserialize, Serialize};

use crate::domain::{StockCode, TradeDate};
use crate::error::AnalysisError;
use crate::http::{self, HttpClient};
use crate::locations::DataLocations;

/// Header marker of the relative-strength column.
pub const RANK_MARKER: &str = "상대강도";

/// One security's relative-strength score for a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankRecord {
    pub code: StockCode,
    /// Percentile-like score in 0..=100. NaN when the source cell held no
    /// leading digits.
    pub score: f64,
}

/// Fetch the ranking table for `date` and extract one security's record.
pub async fn fetch_rank(
    client: &dyn HttpClient,
    locations: &DataLocations,
    date: TradeDate,
    code: &StockCode,
) -> Result<RankRecord, AnalysisError> {
    let document = http::fetch_text(client, locations.rank_document(date)).await?;
    parse_rank(&document, code)?.ok_or_else(|| AnalysisError::RankNotPresent {
        code: code.clone(),
        date,
    })
}

/// Extract one security's rank record from the document, or `None` when the
/// security is absent from an otherwise valid table.
pub fn parse_rank(document: &str, code: &StockCode) -> Result<Option<RankRecord>, AnalysisError> {
    let (header, rows) = find_table(document, RANK_MARKER, "ranking table")?;

    let rank_column = header
        .iter()
        .position(|cell| cell.contains(RANK_MARKER))
        .ok_or_else(|| AnalysisError::Malformed {
            what: "ranking table",
            detail: format!("no column header contains '{RANK_MARKER}'"),
        })?;

    for cells in rows {
        // Rows whose first column carries no bracketed code are footers or
        // malformed filler; skip them.
        let Some(row_code) = bracketed_code(cells.first().map(String::as_str).unwrap_or("")) else {
            continue;
        };

        if &row_code == code {
            let score = cells
                .get(rank_column)
                .and_then(|cell| leading_decimal(cell))
                .unwrap_or(f64::NAN);
            return Ok(Some(RankRecord {
                code: row_code,
                score,
            }));
        }
    }

    Ok(None)
}

/// Locate the embedded pipe table whose header contains `marker`.
///
/// Returns the trimmed header cells and the data rows (the separator row
/// after the header and blank lines are dropped).
pub(crate) fn find_table(
    document: &str,
    marker: &str,
    what: &'static str,
) -> Result<(Vec<String>, Vec<Vec<String>>), AnalysisError> {
    let lines: Vec<&str> = document.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.starts_with('|') && line.contains(marker))
        .ok_or_else(|| AnalysisError::Malformed {
            what,
            detail: format!("no table header line contains '{marker}'"),
        })?;

    let mut table_lines = lines[start..]
        .iter()
        .filter(|line| line.starts_with('|'));

    let header = table_lines
        .next()
        .map(|line| split_row(line))
        .unwrap_or_default();
    // The line after the header is the |---|---| separator row.
    let rows = table_lines
        .skip(1)
        .map(|line| split_row(line))
        .filter(|cells| !cells.iter().all(String::is_empty))
        .collect();

    Ok((header, rows))
}

/// Split a pipe-delimited row into trimmed cells.
pub(crate) fn split_row(line: &str) -> Vec<String> {
    line.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_owned())
        .collect()
}

/// Extract a bracketed six-digit code (`[005930]`) embedded in a cell.
pub(crate) fn bracketed_code(cell: &str) -> Option<StockCode> {
    let mut rest = cell;
    while let Some(open) = rest.find('[') {
        let candidate = &rest[open + 1..];
        let digits: String = candidate.chars().take_while(char::is_ascii_digit).collect();
        if digits.len() == 6 && candidate[digits.len()..].starts_with(']') {
            return StockCode::parse(&digits).ok();
        }
        rest = &rest[open + 1..];
    }
    None
}

/// Parse the leading run of decimal digits (with an optional fraction) in a
/// cell, ignoring trailing annotation text. `None` when the cell does not
/// start with a digit.
pub(crate) fn leading_decimal(cell: &str) -> Option<f64> {
    let digits = cell.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut end = digits;
    let rest = &cell[digits..];
    if rest.starts_with('.') {
        let fraction = rest[1..].bytes().take_while(u8::is_ascii_digit).count();
        if fraction > 0 {
            end += 1 + fraction;
        }
    }

    cell[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = "\
---\n\
layout: post\n\
title: 상대강도 순위\n\
---\n\
\n\
오늘의 순위입니다.\n\
\n\
| 종목명 | 섹터 | 상대강도 1M | 거래량 |\n\
|---|---|---|---|\n\
| [005930](https://finance.daum.net/quotes/A005930) 삼성전자 | 반도체 | 87 (+2) | 12,345 |\n\
| [035720](https://finance.daum.net/quotes/A035720) 카카오 | 서비스 | 64.5 | 9,876 |\n\
| 합계 | | | |\n";

    fn code(value: &str) -> StockCode {
        StockCode::parse(value).expect("valid code")
    }

    #[test]
    fn extracts_rank_for_present_code() {
        let record = parse_rank(DOCUMENT, &code("005930"))
            .expect("table should parse")
            .expect("code should be present");
        assert_eq!(record.score, 87.0);
    }

    #[test]
    fn parses_fractional_scores() {
        let record = parse_rank(DOCUMENT, &code("035720"))
            .expect("table should parse")
            .expect("code should be present");
        assert_eq!(record.score, 64.5);
    }

    #[test]
    fn absent_code_is_none_not_error() {
        let record = parse_rank(DOCUMENT, &code("000001")).expect("table should parse");
        assert!(record.is_none());
    }

    #[test]
    fn survives_reordered_columns() {
        // Same data with the rank column moved first; the marker lookup must
        // still find it.
        let reordered = "\
| 상대강도 1M | 종목명 | 섹터 |\n\
|---|---|---|\n\
| 87 | [005930](https://finance.daum.net/quotes/A005930) 삼성전자 | 반도체 |\n";
        let record = parse_rank(reordered, &code("005930"))
            .expect("table should parse")
            .expect("code should be present");
        assert_eq!(record.score, 87.0);
    }

    #[test]
    fn document_without_marker_table_is_malformed() {
        let err = parse_rank("본문만 있는 문서", &code("005930")).expect_err("must fail");
        assert!(matches!(err, AnalysisError::Malformed { .. }));
    }

    #[test]
    fn unparsable_rank_cell_yields_nan_score() {
        let document = "\
| 종목명 | 상대강도 |\n\
|---|---|\n\
| [005930](x) | n/a |\n";
        let record = parse_rank(document, &code("005930"))
            .expect("table should parse")
            .expect("code should be present");
        assert!(record.score.is_nan());
    }

    #[test]
    fn bracketed_code_requires_exactly_six_digits() {
        assert_eq!(
            bracketed_code("[005930](link)"),
            Some(code("005930")),
        );
        assert!(bracketed_code("[0059301](link)").is_none());
        assert!(bracketed_code("[A05930](link)").is_none());
        assert!(bracketed_code("no code here").is_none());
    }

    #[test]
    fn leading_decimal_ignores_trailing_annotation() {
        assert_eq!(leading_decimal("87 (+2)"), Some(87.0));
        assert_eq!(leading_decimal("64.5"), Some(64.5));
        assert_eq!(leading_decimal("12."), Some(12.0));
        assert_eq!(leading_decimal("n/a"), None);
    }
}
