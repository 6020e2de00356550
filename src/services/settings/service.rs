use crate::models::settings::GridSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use super::mapper::{settings_from_toml, settings_to_toml};

const CONFIG_FILE_NAME: &str = "grid.toml";

/// `<config dir>/planner-layout/grid.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "planner-layout")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<GridSettings> {
        if !self.path.exists() {
            log::debug!(
                "No grid settings at {}, using defaults",
                self.path.display()
            );
            return Ok(GridSettings::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings = settings_from_toml(&content)
            .with_context(|| format!("Failed to load settings from {}", self.path.display()))?;

        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &GridSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = settings_to_toml(settings)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        log::info!("Saved grid settings to {}", self.path.display());
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&GridSettings::default())
    }
}

/// Load settings, falling back to the defaults if the file is unreadable.
pub fn load_settings_or_default(service: &SettingsService) -> GridSettings {
    match service.get() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Failed to load grid settings, using defaults: {:#}", err);
            GridSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_service() -> (TempDir, SettingsService) {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("config").join(CONFIG_FILE_NAME));
        (dir, service)
    }

    #[test]
    fn test_get_default_settings() {
        let (_dir, service) = setup_service();
        assert_eq!(service.get().unwrap(), GridSettings::default());
    }

    #[test]
    fn test_update_settings() {
        let (_dir, service) = setup_service();

        let mut settings = service.get().unwrap();
        settings.visible_hour_start = 6;
        settings.unit_height = 64.0;
        service.update(&settings).unwrap();

        let updated = service.get().unwrap();
        assert_eq!(updated.visible_hour_start, 6);
        assert_eq!(updated.unit_height, 64.0);
        assert!(service.path().exists());
    }

    #[test]
    fn test_update_invalid_settings() {
        let (_dir, service) = setup_service();

        let settings = GridSettings::with_hours(19, 7);
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_reset_settings() {
        let (_dir, service) = setup_service();
        service.update(&GridSettings::with_hours(5, 23)).unwrap();

        service.reset().unwrap();
        assert_eq!(service.get().unwrap(), GridSettings::default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let (_dir, service) = setup_service();
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "visible_hour_start = 20\nvisible_hour_end = 8\n").unwrap();

        assert!(service.get().is_err());
        assert_eq!(load_settings_or_default(&service), GridSettings::default());
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let (_dir, service) = setup_service();
        std::fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        std::fs::write(service.path(), "this is not toml = = =").unwrap();

        assert_eq!(load_settings_or_default(&service), GridSettings::default());
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert_eq!(path.file_name().unwrap(), CONFIG_FILE_NAME);
        }
    }
}
