//! To-do domain models.

use serde::{Deserialize, Serialize};

use crate::colors::Color;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a to-do item with a percentage weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub percentage: f64,
    pub is_completed: bool,
    pub color: Color,
    pub created_at: String,
    pub updated_at: String,
}

/// Input model for creating a new to-do item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub percentage: f64,
    /// Assigned from the palette when not provided.
    pub color: Option<Color>,
}

impl NewTodoItem {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_percentage(self.percentage)
    }

    /// Build the persisted item, stamping id and timestamps. The color must
    /// already be resolved by the caller.
    pub fn into_item(self, color: Color) -> TodoItem {
        let now = chrono::Utc::now().to_rfc3339();
        TodoItem {
            id: self.id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            title: self.title,
            percentage: self.percentage,
            is_completed: false,
            color,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Input model for editing an existing item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodoUpdate {
    pub title: String,
    pub percentage: f64,
}

impl TodoUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_title(&self.title)?;
        validate_percentage(self.percentage)
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "title".to_string(),
        )));
    }
    Ok(())
}

fn validate_percentage(percentage: f64) -> Result<()> {
    if !percentage.is_finite() || percentage <= 0.0 || percentage > 100.0 {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Percentage must be greater than 0 and at most 100, got {}",
            percentage
        ))));
    }
    Ok(())
}
