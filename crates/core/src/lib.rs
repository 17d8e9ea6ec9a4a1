//! Taskpie Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Taskpie: the to-do list
//! with percentage weights, the allocation budget checks, and the pie chart
//! layout. It is storage-agnostic and defines traits that are implemented
//! by the `storage-prefs` crate.

pub mod budget;
pub mod charts;
pub mod colors;
pub mod constants;
pub mod errors;
pub mod settings;
pub mod todos;

// Re-export common types from the todos module
pub use todos::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
