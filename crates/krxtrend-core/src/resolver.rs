//! Free-text identifier resolution against the reference table.

use crate::domain::{Listing, ListingTable, StockCode};

/// Resolve free-text input to a canonical listing.
///
/// A standalone six-digit token is tried as an exact code first and wins
/// over any name match. Otherwise names are scanned longest-first and the
/// first one occurring as a substring of the input wins; longest-first is
/// the tie-break that keeps a short name from shadowing a longer name it is
/// a prefix of. `None` means not found; callers branch on it, it is not an
/// error.
pub fn resolve(input: &str, table: &ListingTable) -> Option<Listing> {
    if let Some(token) = six_digit_token(input) {
        if let Ok(code) = StockCode::parse(token) {
            if let Some(listing) = table.find_code(&code) {
                return Some(listing.clone());
            }
        }
    }

    let mut by_length: Vec<&Listing> = table.iter().collect();
    by_length.sort_by_key(|listing| std::cmp::Reverse(listing.name.chars().count()));

    by_length
        .into_iter()
        .find(|listing| input.contains(&listing.name))
        .cloned()
}

/// First run of exactly six ASCII digits not adjoining another alphanumeric
/// character.
fn six_digit_token(input: &str) -> Option<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut run_start: Option<usize> = None;

    for index in 0..=chars.len() {
        let is_digit = index < chars.len() && chars[index].1.is_ascii_digit();
        match (run_start, is_digit) {
            (None, true) => run_start = Some(index),
            (Some(start), false) => {
                let bounded_left = start == 0 || !chars[start - 1].1.is_alphanumeric();
                let bounded_right = index >= chars.len() || !chars[index].1.is_alphanumeric();
                if index - start == 6 && bounded_left && bounded_right {
                    let byte_start = chars[start].0;
                    let byte_end = chars
                        .get(index)
                        .map_or(input.len(), |&(byte, _)| byte);
                    return Some(&input[byte_start..byte_end]);
                }
                run_start = None;
            }
            _ => {}
        }
    }

    None
}
