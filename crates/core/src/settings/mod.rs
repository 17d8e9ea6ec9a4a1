//! Settings module - app settings and about-screen metadata.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{AppInfo, Settings, SettingsUpdate};
pub use settings_service::{SettingsService, SettingsServiceTrait};
pub use settings_traits::SettingsRepositoryTrait;
