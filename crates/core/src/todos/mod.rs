//! To-dos module - domain models, services, and traits.

mod todos_model;
mod todos_service;
mod todos_traits;

pub use todos_model::{NewTodoItem, TodoItem, TodoUpdate};
pub use todos_service::TodoService;
pub use todos_traits::{TodoRepositoryTrait, TodoServiceTrait};
