//! hpglkit Settings Crate
//!
//! Handles job configuration: the operation list applied to a drawing,
//! output locations, and persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{Config, OutputSettings, APP_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, SettingsError, SettingsResult};
