use serde::{Deserialize, Serialize};

use crate::domain::TradeDate;

/// Number of conditions in the trend template. Fixed; report numbering
/// depends on it.
pub const CHECKLIST_LEN: usize = 8;

/// One evaluated condition with its human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub description: String,
    pub passed: bool,
}

impl ChecklistItem {
    pub fn new(description: impl Into<String>, passed: bool) -> Self {
        Self {
            description: description.into(),
            passed,
        }
    }
}

/// The evaluated checklist: exactly [`CHECKLIST_LEN`] items in fixed order,
/// the reference date of the underlying data, and the rank score that fed
/// the final condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResult {
    pub items: Vec<ChecklistItem>,
    pub as_of: TradeDate,
    pub rank: f64,
}

impl ChecklistResult {
    pub fn passed_count(&self) -> usize {
        self.items.iter().filter(|item| item.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed_count() == self.items.len()
    }
}
