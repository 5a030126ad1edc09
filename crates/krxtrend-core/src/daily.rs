//! Batch path: the published trend-template list, diffed day over day.
//!
//! The upstream publishes a per-date post listing every security that
//! passed the full template. This module locates the latest published list,
//! compares it with the previous one, and flags fresh entrants.

use std::collections::BTreeSet;
use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{StockCode, TradeDate};
use crate::error::AnalysisError;
use crate::http::{self, HttpClient};
use crate::locations::DataLocations;
use crate::rank::{self, RANK_MARKER};

/// Header marker of the security-name column.
const NAME_MARKER: &str = "종목명";

/// Lookback bound of the batch path, in calendar days.
pub const LIST_WINDOW_DAYS: u32 = 14;

/// One security on a published trend-template list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEntry {
    pub code: StockCode,
    pub name: String,
    pub rank: f64,
}

/// A [`TrendEntry`] annotated with whether it is new versus the previous
/// published list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(flatten)]
    pub entry: TrendEntry,
    pub is_new: bool,
}

/// The latest published list diffed against the one before it. New entries
/// come first; both groups are ordered by rank descending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyList {
    pub date: TradeDate,
    pub previous_date: TradeDate,
    pub entries: Vec<DailyEntry>,
}

/// Most recent date strictly before `before` with a published list.
pub async fn locate_list_date(
    client: &dyn HttpClient,
    locations: &DataLocations,
    before: TradeDate,
) -> Result<TradeDate, AnalysisError> {
    let mut date = before.pred();

    for _ in 0..LIST_WINDOW_DAYS {
        let url = locations.trend_list_document(date);
        let found = http::exists(client, &url).await?;
        debug!(%date, found, "probed trend list");
        if found {
            return Ok(date);
        }
        date = date.pred();
    }

    Err(AnalysisError::AllDatesExhausted {
        window_days: LIST_WINDOW_DAYS,
    })
}

/// Fetch and parse one date's published list.
pub async fn fetch_trend_list(
    client: &dyn HttpClient,
    locations: &DataLocations,
    date: TradeDate,
) -> Result<Vec<TrendEntry>, AnalysisError> {
    let document = http::fetch_text(client, locations.trend_list_document(date)).await?;
    parse_trend_list(&document)
}

/// Extract (code, name, rank) entries from a published list document.
///
/// Same drift defenses as the ranking-table parser: the table is found by
/// the rank marker, the name column by its own marker (second column when
/// the marker is absent), codes by the bracketed pattern. Rows without an
/// extractable code or rank are dropped.
pub fn parse_trend_list(document: &str) -> Result<Vec<TrendEntry>, AnalysisError> {
    let (header, rows) = rank::find_table(document, RANK_MARKER, "trend list")?;

    let rank_column = header
        .iter()
        .position(|cell| cell.contains(RANK_MARKER))
        .ok_or_else(|| AnalysisError::Malformed {
            what: "trend list",
            detail: format!("no column header contains '{RANK_MARKER}'"),
        })?;
    // The first column always carries the code link; when the name marker
    // labels that same column, the display name sits in the next one.
    let name_column = header
        .iter()
        .position(|cell| cell.contains(NAME_MARKER))
        .filter(|&column| column != 0)
        .unwrap_or(1);

    let mut entries = Vec::new();
    for cells in rows {
        let Some(code) = rank::bracketed_code(cells.first().map(String::as_str).unwrap_or(""))
        else {
            continue;
        };
        let Some(score) = cells.get(rank_column).and_then(|cell| rank::leading_decimal(cell))
        else {
            continue;
        };
        let name = cells
            .get(name_column)
            .map(|cell| cell.trim().to_owned())
            .unwrap_or_default();

        entries.push(TrendEntry {
            code,
            name,
            rank: score,
        });
    }

    Ok(entries)
}

/// Build today's diffed list.
///
/// Uses today's publication when it exists, otherwise the most recent one;
/// the comparison baseline is the publication before that.
pub async fn daily_list(
    client: &dyn HttpClient,
    locations: &DataLocations,
) -> Result<DailyList, AnalysisError> {
    let today = TradeDate::today_utc();
    let date = if http::exists(client, &locations.trend_list_document(today)).await? {
        today
    } else {
        locate_list_date(client, locations, today).await?
    };

    let current = fetch_trend_list(client, locations, date).await?;
    let previous_date = locate_list_date(client, locations, date).await?;
    let previous = fetch_trend_list(client, locations, previous_date).await?;
    info!(%date, %previous_date, entries = current.len(), "built daily list");

    Ok(diff_lists(date, previous_date, current, &previous))
}

/// Flag entries absent from the previous list and order new entries first,
/// each group by rank descending.
pub fn diff_lists(
    date: TradeDate,
    previous_date: TradeDate,
    current: Vec<TrendEntry>,
    previous: &[TrendEntry],
) -> DailyList {
    let prior_codes: BTreeSet<&StockCode> = previous.iter().map(|entry| &entry.code).collect();

    let mut entries: Vec<DailyEntry> = current
        .into_iter()
        .map(|entry| {
            let is_new = !prior_codes.contains(&entry.code);
            DailyEntry { entry, is_new }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.is_new.cmp(&a.is_new).then(
            b.entry
                .rank
                .partial_cmp(&a.entry.rank)
                .unwrap_or(std::cmp::Ordering::Equal),
        )
    });

    DailyList {
        date,
        previous_date,
        entries,
    }
}

/// Render the diffed list as display text.
pub fn format_daily_list(list: &DailyList) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "📈 Trend-template pass list for {}", list.date);
    let _ = writeln!(
        out,
        "(compared against {}, {} entries)",
        list.previous_date,
        list.entries.len()
    );

    for entry in &list.entries {
        let _ = write!(
            out,
            "📌 {} ({}) RS: {:.0}",
            entry.entry.name, entry.entry.code, entry.entry.rank
        );
        if entry.is_new {
            let _ = write!(out, " ✨ new");
        }
        let _ = writeln!(out);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_DOCUMENT: &str = "\
---\n\
layout: post\n\
---\n\
\n\
| 종목명 | 섹터 | 상대강도 |\n\
|---|---|---|\n\
| [005930](https://finance.daum.net/quotes/A005930) | 삼성전자 | 87 |\n\
| [035720](https://finance.daum.net/quotes/A035720) | 카카오 | 92 |\n";

    fn date(value: &str) -> TradeDate {
        TradeDate::parse(value).expect("valid date")
    }

    fn entry(code: &str, name: &str, rank: f64) -> TrendEntry {
        TrendEntry {
            code: StockCode::parse(code).expect("valid code"),
            name: name.to_owned(),
            rank,
        }
    }

    #[test]
    fn parses_entries_from_list_document() {
        let entries = parse_trend_list(LIST_DOCUMENT).expect("list should parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].code.as_str(), "005930");
        assert_eq!(entries[0].name, "삼성전자");
        assert_eq!(entries[1].rank, 92.0);
    }

    #[test]
    fn name_column_follows_its_marker_when_not_the_code_column() {
        let drifted = "\
| 코드 | 섹터 | 종목명 | 상대강도 |\n\
|---|---|---|---|\n\
| [005930](x) | 반도체 | 삼성전자 | 87 |\n";
        let entries = parse_trend_list(drifted).expect("list should parse");
        assert_eq!(entries[0].name, "삼성전자");
    }

    #[test]
    fn rows_without_a_parsable_rank_are_dropped() {
        let document = "\
| 종목명 | 섹터 | 상대강도 |\n\
|---|---|---|\n\
| [005930](x) | 삼성전자 | 87 |\n\
| [035720](x) | 카카오 | - |\n";
        let entries = parse_trend_list(document).expect("list should parse");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn diff_flags_new_entries_and_sorts_them_first() {
        let current = vec![
            entry("005930", "삼성전자", 87.0),
            entry("035720", "카카오", 92.0),
            entry("000660", "SK하이닉스", 95.0),
        ];
        let previous = vec![entry("005930", "삼성전자", 85.0)];

        let list = diff_lists(date("2025-07-18"), date("2025-07-17"), current, &previous);

        let flags: Vec<(String, bool)> = list
            .entries
            .iter()
            .map(|e| (e.entry.name.clone(), e.is_new))
            .collect();
        assert_eq!(
            flags,
            vec![
                (String::from("SK하이닉스"), true),
                (String::from("카카오"), true),
                (String::from("삼성전자"), false),
            ]
        );
    }

    #[test]
    fn formats_list_with_new_tags() {
        let current = vec![entry("035720", "카카오", 92.0)];
        let list = diff_lists(date("2025-07-18"), date("2025-07-17"), current, &[]);
        let text = format_daily_list(&list);

        assert!(text.contains("2025-07-18"));
        assert!(text.contains("📌 카카오 (035720) RS: 92 ✨ new"));
    }
}
