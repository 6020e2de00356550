use crate::models::settings::GridSettings;
use anyhow::{Context, Result};

pub fn settings_from_toml(content: &str) -> Result<GridSettings> {
    toml::from_str(content).context("Failed to parse grid settings TOML")
}

pub fn settings_to_toml(settings: &GridSettings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize grid settings")
}
