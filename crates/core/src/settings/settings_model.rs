use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: crate::constants::DEFAULT_THEME.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub theme: Option<String>,
}

/// Static application metadata for the about screen.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub feedback_email: String,
}

impl AppInfo {
    /// `mailto:` URL for the feedback action, with subject and body
    /// percent-encoded.
    pub fn feedback_mailto_url(&self) -> String {
        let subject = format!("{} feedback", self.name);
        let body = "Please enter your feedback here...";
        format!(
            "mailto:{}?subject={}&body={}",
            self.feedback_email,
            urlencoding::encode(&subject),
            urlencoding::encode(body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_mailto_url_is_percent_encoded() {
        let info = AppInfo {
            name: "Taskpie".to_string(),
            version: "1.1.0".to_string(),
            description: "Percentage-weighted to-do tracker".to_string(),
            feedback_email: "feedback@taskpie.app".to_string(),
        };
        let url = info.feedback_mailto_url();
        assert!(url.starts_with("mailto:feedback@taskpie.app?subject=Taskpie%20feedback"));
        assert!(!url.contains(' '));
    }
}
