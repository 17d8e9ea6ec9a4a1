use super::SettingsRepositoryTrait;
use crate::constants::THEME_SETTING_KEY;
use crate::errors::Result;
use crate::settings::{AppInfo, Settings, SettingsUpdate};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    fn get_theme(&self) -> Result<String>;

    async fn update_theme(&self, theme: &str) -> Result<()>;

    fn app_info(&self) -> AppInfo;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.settings_repository.get_settings()
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        self.settings_repository.update_settings(new_settings).await
    }

    fn get_theme(&self) -> Result<String> {
        self.settings_repository.get_setting(THEME_SETTING_KEY)
    }

    async fn update_theme(&self, theme: &str) -> Result<()> {
        debug!("Updating theme to '{}'", theme);
        self.settings_repository
            .update_setting(THEME_SETTING_KEY, theme)
            .await
    }

    fn app_info(&self) -> AppInfo {
        AppInfo {
            name: "Taskpie".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "A to-do tracker that shows each task's share of your attention as a pie slice".to_string(),
            feedback_email: "feedback@taskpie.app".to_string(),
        }
    }
}
