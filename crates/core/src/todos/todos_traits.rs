use crate::budget::BudgetSummary;
use crate::charts::ChartDataItem;
use crate::errors::Result;
use crate::todos::todos_model::{NewTodoItem, TodoItem, TodoUpdate};
use async_trait::async_trait;

/// Trait for to-do repository operations.
///
/// Implementations persist the whole list as one blob; every mutation
/// rewrites it.
#[async_trait]
pub trait TodoRepositoryTrait: Send + Sync {
    fn load_todos(&self) -> Result<Vec<TodoItem>>;
    async fn insert_todo(&self, item: TodoItem) -> Result<TodoItem>;
    async fn update_todo(&self, item: TodoItem) -> Result<TodoItem>;
    async fn delete_todo(&self, item_id: String) -> Result<usize>;
}

/// Trait for to-do service operations.
#[async_trait]
pub trait TodoServiceTrait: Send + Sync {
    fn get_todos(&self) -> Result<Vec<TodoItem>>;
    fn incomplete_todos(&self) -> Result<Vec<TodoItem>>;
    fn used_percentage(&self) -> Result<f64>;
    fn remaining_percentage(&self) -> Result<f64>;
    fn budget_summary(&self) -> Result<BudgetSummary>;
    fn chart_data(&self) -> Result<Vec<ChartDataItem>>;

    async fn add_todo(&self, new_todo: NewTodoItem) -> Result<TodoItem>;
    async fn update_todo(&self, item_id: &str, update: TodoUpdate) -> Result<TodoItem>;
    async fn delete_todo(&self, item_id: &str) -> Result<usize>;
    async fn toggle_completion(&self, item_id: &str) -> Result<TodoItem>;
}
