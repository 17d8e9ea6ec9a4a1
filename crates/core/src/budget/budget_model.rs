use serde::{Deserialize, Serialize};

/// Snapshot of the percentage budget for frontend display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub used_percent: f64,
    pub remaining_percent: f64,
    pub item_count: usize,
}
