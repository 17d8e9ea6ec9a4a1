//! Flat-file preference store for Taskpie.
//!
//! This crate provides the single place where persistence exists: a JSON
//! key-value blob on disk, the desktop preference-store analog. It
//! implements the repository traits defined in `taskpie-core` and contains:
//! - The preference store itself (load, whole-blob rewrite on every set)
//! - Repository implementations for to-dos and settings
//! - Seeded sample data for first launch or an unreadable blob
//!
//! # Architecture
//!
//! All other crates are storage-agnostic and work with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!    storage-prefs (this crate)
//!              │
//!              ▼
//!         prefs.json
//! ```

pub mod errors;
pub mod prefs;

// Repository implementations
pub mod settings;
pub mod todos;

// Re-export store utilities
pub use prefs::PreferenceStore;

// Re-export storage errors
pub use errors::StorageError;

// Re-export from taskpie-core for convenience
pub use taskpie_core::errors::{Error, Result, StoreError};
