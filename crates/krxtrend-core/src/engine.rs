//! The eight-point trend-template checklist.

use crate::domain::{ChecklistItem, ChecklistResult, PriceSeries};
use crate::error::AnalysisError;

/// Moving-average windows, in trading days.
pub const MA_SHORT: usize = 50;
pub const MA_MID: usize = 150;
pub const MA_LONG: usize = 200;

/// Trailing points making up the 52-week window.
pub const WEEK52_WINDOW: usize = 252;

/// How far back (inclusive offset from the end) the long average is sampled
/// for the "rising over the last month" condition.
const PREV_OFFSET: usize = 21;

/// Minimum relative-strength rank for the final condition.
pub const RANK_THRESHOLD: f64 = 70.0;

/// Evaluate the checklist against an ordered price series and a rank score.
///
/// Condition order is fixed; report numbering depends on it. A condition
/// that compares against an average the history is too short to define
/// reads false rather than erroring; only an empty series is a hard
/// failure.
pub fn evaluate(series: &PriceSeries, rank: f64) -> Result<ChecklistResult, AnalysisError> {
    let closes = series.closes();
    let n = closes.len();

    let Some(latest) = series.last() else {
        return Err(AnalysisError::InsufficientHistory {
            len: 0,
            required: 1,
        });
    };
    let close = latest.close;

    let last = n - 1;
    let ma50 = trailing_mean(&closes, MA_SHORT, last);
    let ma150 = trailing_mean(&closes, MA_MID, last);
    let ma200 = trailing_mean(&closes, MA_LONG, last);

    // With fewer than PREV_OFFSET points the long average is reused as its
    // own reference and the rising check is vacuously true.
    let short_history = n < PREV_OFFSET;
    let prev200 = if short_history {
        ma200
    } else {
        trailing_mean(&closes, MA_LONG, n - PREV_OFFSET)
    };

    let week52 = &closes[n.saturating_sub(WEEK52_WINDOW)..];
    let min52 = week52.iter().copied().fold(f64::INFINITY, f64::min);
    let max52 = week52.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let items = vec![
        ChecklistItem::new(
            "Close above the 150-day and 200-day averages",
            gt(Some(close), ma150) && gt(Some(close), ma200),
        ),
        ChecklistItem::new(
            "150-day average above the 200-day average",
            gt(ma150, ma200),
        ),
        ChecklistItem::new(
            "200-day average rising over the last month",
            short_history || gt(ma200, prev200),
        ),
        ChecklistItem::new(
            "50-day average above the 150-day and 200-day averages",
            gt(ma50, ma150) && gt(ma50, ma200),
        ),
        ChecklistItem::new("Close above the 50-day average", gt(Some(close), ma50)),
        ChecklistItem::new(
            "Close at least 30% above the 52-week low",
            min52 > 0.0 && (close - min52) / min52 >= 0.30,
        ),
        ChecklistItem::new(
            "Close within 25% of the 52-week high",
            max52 > 0.0 && (max52 - close) / max52 <= 0.25,
        ),
        ChecklistItem::new("Relative-strength rank at 70 or higher", rank >= RANK_THRESHOLD),
    ];

    Ok(ChecklistResult {
        items,
        as_of: latest.date,
        rank,
    })
}

/// Trailing arithmetic mean over `window` points ending at `index`.
///
/// Undefined (no padding, no back-fill) until `window` points exist.
fn trailing_mean(closes: &[f64], window: usize, index: usize) -> Option<f64> {
    if index + 1 < window {
        return None;
    }
    let slice = &closes[index + 1 - window..=index];
    Some(slice.iter().sum::<f64>() / window as f64)
}

/// Strict greater-than where either side may be undefined.
fn gt(lhs: Option<f64>, rhs: Option<f64>) -> bool {
    matches!((lhs, rhs), (Some(l), Some(r)) if l > r)
}
