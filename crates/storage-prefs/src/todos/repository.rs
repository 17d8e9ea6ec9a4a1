use async_trait::async_trait;
use log::error;
use std::sync::Arc;

use crate::errors::StorageError;
use crate::prefs::PreferenceStore;
use taskpie_core::colors::PALETTE;
use taskpie_core::constants::TODOS_STORE_KEY;
use taskpie_core::todos::{NewTodoItem, TodoItem, TodoRepositoryTrait};
use taskpie_core::Result;

pub struct TodoRepository {
    store: Arc<PreferenceStore>,
}

impl TodoRepository {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        TodoRepository { store }
    }

    /// Load the list, seeding sample data when nothing is saved yet or the
    /// saved blob cannot be decoded.
    fn load_or_seed(&self) -> Result<Vec<TodoItem>> {
        match self.store.get(TODOS_STORE_KEY)? {
            Some(value) => match serde_json::from_value::<Vec<TodoItem>>(value) {
                Ok(todos) => Ok(todos),
                Err(e) => {
                    error!("Failed to decode saved to-dos ({}); reseeding sample data", e);
                    self.seed()
                }
            },
            None => self.seed(),
        }
    }

    fn seed(&self) -> Result<Vec<TodoItem>> {
        let todos = sample_todos();
        self.save(&todos)?;
        Ok(todos)
    }

    /// Rewrite the whole list blob.
    fn save(&self, todos: &[TodoItem]) -> Result<()> {
        let value = serde_json::to_value(todos).map_err(StorageError::from)?;
        self.store.set(TODOS_STORE_KEY, value)
    }
}

#[async_trait]
impl TodoRepositoryTrait for TodoRepository {
    fn load_todos(&self) -> Result<Vec<TodoItem>> {
        self.load_or_seed()
    }

    async fn insert_todo(&self, item: TodoItem) -> Result<TodoItem> {
        let mut todos = self.load_or_seed()?;
        todos.push(item.clone());
        self.save(&todos)?;
        Ok(item)
    }

    async fn update_todo(&self, item: TodoItem) -> Result<TodoItem> {
        let mut todos = self.load_or_seed()?;
        match todos.iter_mut().find(|t| t.id == item.id) {
            Some(slot) => {
                *slot = item.clone();
                self.save(&todos)?;
                Ok(item)
            }
            None => Err(StorageError::NotFound(format!("To-do item '{}'", item.id)).into()),
        }
    }

    async fn delete_todo(&self, item_id: String) -> Result<usize> {
        let mut todos = self.load_or_seed()?;
        let before = todos.len();
        todos.retain(|t| t.id != item_id);
        let deleted = before - todos.len();
        if deleted > 0 {
            self.save(&todos)?;
        }
        Ok(deleted)
    }
}

/// Sample list shown on first launch.
pub fn sample_todos() -> Vec<TodoItem> {
    [
        ("Morning deep work", 30.0),
        ("Project documentation", 25.0),
        ("Code review", 20.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, percentage))| {
        NewTodoItem {
            id: None,
            title: title.to_string(),
            percentage,
            color: None,
        }
        .into_item(PALETTE[i])
    })
    .collect()
}
