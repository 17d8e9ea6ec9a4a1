//! The percentage budget: incomplete items share a fixed budget of 100%.
//!
//! These are pure functions over the item list; the to-do service calls
//! them on every add/edit.

use crate::budget::budget_model::BudgetSummary;
use crate::constants::{PERCENT_BUDGET, PERCENT_EPSILON};
use crate::errors::{Error, Result};
use crate::todos::TodoItem;

/// Sum of percentages of incomplete items.
pub fn used_percent(items: &[TodoItem]) -> f64 {
    items
        .iter()
        .filter(|item| !item.is_completed)
        .map(|item| item.percentage)
        .sum()
}

/// Unallocated budget, never negative.
pub fn remaining_percent(items: &[TodoItem]) -> f64 {
    (PERCENT_BUDGET - used_percent(items)).max(0.0)
}

/// Check that allocating `percentage` keeps the incomplete sum within the
/// budget. `exclude_id` removes the item being edited from the sum.
/// A small tolerance absorbs float error on percent sums.
pub fn check_allocation(items: &[TodoItem], percentage: f64, exclude_id: Option<&str>) -> Result<()> {
    let used: f64 = items
        .iter()
        .filter(|item| !item.is_completed)
        .filter(|item| exclude_id != Some(item.id.as_str()))
        .map(|item| item.percentage)
        .sum();

    let total = used + percentage;
    if total > PERCENT_BUDGET + PERCENT_EPSILON {
        return Err(Error::ConstraintViolation(format!(
            "Allocations must stay within {}%. Requested total: {:.2}%",
            PERCENT_BUDGET, total
        )));
    }
    Ok(())
}

pub fn summary(items: &[TodoItem]) -> BudgetSummary {
    let incomplete = items.iter().filter(|item| !item.is_completed).count();
    BudgetSummary {
        used_percent: used_percent(items),
        remaining_percent: remaining_percent(items),
        item_count: incomplete,
    }
}
