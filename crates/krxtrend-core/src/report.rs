//! Plain-text rendering of an evaluated checklist.

use std::fmt::Write;

use crate::domain::ChecklistResult;

const PASS_GLYPH: &str = "✅";
const FAIL_GLYPH: &str = "❌";

/// Render the checklist as display text.
///
/// Pure function: a title line, one numbered line per condition (the rank
/// value is appended on the rank condition's line), a summary line, and a
/// trailing data-as-of line.
pub fn format_report(name: &str, result: &ChecklistResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[Trend template - {name} ({})]", result.as_of);

    let rank_line = result.items.len();
    for (index, item) in result.items.iter().enumerate() {
        let number = index + 1;
        let glyph = if item.passed { PASS_GLYPH } else { FAIL_GLYPH };
        let _ = write!(out, "{number}. {} {glyph}", item.description);
        if number == rank_line {
            let _ = write!(out, " (RS: {:.0})", result.rank);
        }
        let _ = writeln!(out);
    }

    let summary = if result.all_passed() {
        String::from("▶ ALL PASS 💯")
    } else {
        format!("▶ {}/{} PASS", result.passed_count(), result.items.len())
    };
    let _ = writeln!(out, "{summary}");
    let _ = write!(out, "⚠ data as of {}", result.as_of);

    out
}
