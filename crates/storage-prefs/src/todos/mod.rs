mod repository;

pub use repository::{sample_todos, TodoRepository};
