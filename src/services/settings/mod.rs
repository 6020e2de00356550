//! Grid settings persistence.
//!
//! Settings live in a small TOML file under the user's config directory and
//! are handed to the layout engine explicitly.

mod mapper;
mod service;

pub use mapper::{settings_from_toml, settings_to_toml};
pub use service::{default_config_path, load_settings_or_default, SettingsService};
