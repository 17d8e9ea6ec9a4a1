use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

use crate::budget::{self, BudgetSummary};
use crate::charts::ChartDataItem;
use crate::colors;
use crate::errors::{Result, StoreError};
use crate::todos::todos_model::{NewTodoItem, TodoItem, TodoUpdate};
use crate::todos::todos_traits::{TodoRepositoryTrait, TodoServiceTrait};

pub struct TodoService {
    repository: Arc<dyn TodoRepositoryTrait>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepositoryTrait>) -> Self {
        TodoService { repository }
    }

    fn find_todo(&self, item_id: &str) -> Result<TodoItem> {
        self.repository
            .load_todos()?
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| StoreError::NotFound(format!("To-do item '{}'", item_id)).into())
    }
}

#[async_trait]
impl TodoServiceTrait for TodoService {
    fn get_todos(&self) -> Result<Vec<TodoItem>> {
        self.repository.load_todos()
    }

    fn incomplete_todos(&self) -> Result<Vec<TodoItem>> {
        Ok(self
            .repository
            .load_todos()?
            .into_iter()
            .filter(|item| !item.is_completed)
            .collect())
    }

    fn used_percentage(&self) -> Result<f64> {
        Ok(budget::used_percent(&self.repository.load_todos()?))
    }

    fn remaining_percentage(&self) -> Result<f64> {
        Ok(budget::remaining_percent(&self.repository.load_todos()?))
    }

    fn budget_summary(&self) -> Result<BudgetSummary> {
        Ok(budget::summary(&self.repository.load_todos()?))
    }

    fn chart_data(&self) -> Result<Vec<ChartDataItem>> {
        Ok(self
            .incomplete_todos()?
            .into_iter()
            .map(|item| ChartDataItem {
                title: item.title,
                percentage: item.percentage,
                color: item.color,
            })
            .collect())
    }

    async fn add_todo(&self, new_todo: NewTodoItem) -> Result<TodoItem> {
        new_todo.validate()?;

        let todos = self.repository.load_todos()?;
        budget::check_allocation(&todos, new_todo.percentage, None)?;

        let color = match new_todo.color {
            Some(color) => color,
            None => {
                let used: Vec<_> = todos.iter().map(|item| item.color).collect();
                colors::next_available(&used)
            }
        };

        let item = new_todo.into_item(color);
        debug!("Adding to-do '{}' at {}%", item.title, item.percentage);
        self.repository.insert_todo(item).await
    }

    async fn update_todo(&self, item_id: &str, update: TodoUpdate) -> Result<TodoItem> {
        update.validate()?;

        let todos = self.repository.load_todos()?;
        let mut item = self.find_todo(item_id)?;

        // A completed item carries no weight, so edits to it skip the
        // budget check.
        if !item.is_completed {
            budget::check_allocation(&todos, update.percentage, Some(item_id))?;
        }

        item.title = update.title;
        item.percentage = update.percentage;
        item.updated_at = chrono::Utc::now().to_rfc3339();
        self.repository.update_todo(item).await
    }

    async fn delete_todo(&self, item_id: &str) -> Result<usize> {
        let deleted = self.repository.delete_todo(item_id.to_string()).await?;
        if deleted == 0 {
            warn!("Delete requested for unknown to-do '{}'", item_id);
            return Err(StoreError::NotFound(format!("To-do item '{}'", item_id)).into());
        }
        Ok(deleted)
    }

    async fn toggle_completion(&self, item_id: &str) -> Result<TodoItem> {
        let mut item = self.find_todo(item_id)?;
        // Re-activating an item may transiently push the sum past the
        // budget; the chart clamps, and the next edit re-validates.
        item.is_completed = !item.is_completed;
        item.updated_at = chrono::Utc::now().to_rfc3339();
        debug!(
            "To-do '{}' marked {}",
            item.title,
            if item.is_completed { "done" } else { "active" }
        );
        self.repository.update_todo(item).await
    }
}
