use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::StorageError;
use crate::prefs::PreferenceStore;
use taskpie_core::constants::{DEFAULT_THEME, THEME_SETTING_KEY};
use taskpie_core::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate};
use taskpie_core::Result;

pub struct SettingsRepository {
    store: Arc<PreferenceStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        SettingsRepository { store }
    }

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .store
            .get(key)?
            .and_then(|value| value.as_str().map(|s| s.to_string())))
    }
}

#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();
        if let Some(theme) = self.get_string(THEME_SETTING_KEY)? {
            settings.theme = theme;
        }
        Ok(settings)
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        if let Some(ref theme) = new_settings.theme {
            self.store
                .set(THEME_SETTING_KEY, Value::String(theme.clone()))?;
        }
        Ok(())
    }

    fn get_setting(&self, setting_key: &str) -> Result<String> {
        match self.get_string(setting_key)? {
            Some(value) => Ok(value),
            None => {
                // Known settings fall back to their defaults.
                match setting_key {
                    THEME_SETTING_KEY => Ok(DEFAULT_THEME.to_string()),
                    _ => Err(StorageError::NotFound(format!("Setting '{}'", setting_key)).into()),
                }
            }
        }
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.store
            .set(setting_key, Value::String(setting_value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_theme_defaults_then_persists() {
        let dir = tempdir().unwrap();
        let store = Arc::new(PreferenceStore::open(dir.path()).unwrap());
        let repo = SettingsRepository::new(Arc::clone(&store));

        assert_eq!(repo.get_setting(THEME_SETTING_KEY).unwrap(), DEFAULT_THEME);

        repo.update_setting(THEME_SETTING_KEY, "dark").await.unwrap();
        assert_eq!(repo.get_settings().unwrap().theme, "dark");
    }

    #[test]
    fn test_unknown_setting_is_not_found() {
        let dir = tempdir().unwrap();
        let store = Arc::new(PreferenceStore::open(dir.path()).unwrap());
        let repo = SettingsRepository::new(store);

        assert!(repo.get_setting("no_such_key").is_err());
    }
}
