//! Budget module - the sum-to-100 invariant over incomplete items.

mod budget_model;
mod budget_service;

pub use budget_model::BudgetSummary;
pub use budget_service::{check_allocation, remaining_percent, summary, used_percent};
