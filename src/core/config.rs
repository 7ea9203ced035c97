use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

use super::alerts::model::AlertPrefs;

/// Dashboard settings with the treatment-age alert preferences.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Threshold and notification preferences
    #[serde(default)]
    pub alert_prefs: AlertPrefs,
}

pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(app_config_dir: PathBuf) -> Self {
        Self {
            config_path: app_config_dir.join("settings.json"),
        }
    }

    pub fn load(&self) -> Settings {
        if self.config_path.exists() {
            if let Ok(content) = fs::read_to_string(&self.config_path) {
                if let Ok(settings) = serde_json::from_str(&content) {
                    return settings;
                }
            }
        }
        Settings::default()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(settings)?;
        fs::write(&self.config_path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        let default = manager.load();
        assert_eq!(default.alert_prefs, AlertPrefs::default());

        let new_settings = Settings {
            alert_prefs: AlertPrefs {
                warn_days: 10,
                ..AlertPrefs::default_enabled()
            },
        };

        manager.save(&new_settings).unwrap();
        let loaded = manager.load();

        assert_eq!(loaded.alert_prefs.warn_days, 10);
        assert!(loaded.alert_prefs.enable_alerts);
    }

    #[test]
    fn test_malformed_file_falls_back_to_default() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().to_path_buf());

        fs::write(dir.path().join("settings.json"), "not json").unwrap();
        assert_eq!(manager.load(), Settings::default());
    }
}
