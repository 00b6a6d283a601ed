//! Job configuration
//!
//! A config file holds the list of operations to run on a drawing and
//! where the results go. Files are JSON or TOML, chosen by extension.
//!
//! ```toml
//! [[job]]
//! op = "optimize"
//!
//! [[job]]
//! op = "blade_offset"
//! offset_mm = 0.25
//!
//! [output]
//! svg_preview = true
//! svg_path = "preview.svg"
//! ```

use std::path::{Path, PathBuf};

use hpglkit_camtools::{Operation, PlotPipeline};
use hpglkit_core::MeasurementSystem;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "hpglkit";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Where prepared jobs are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputSettings {
    /// HPGL output file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hpgl_path: Option<PathBuf>,
    /// Write an SVG preview alongside
    pub svg_preview: bool,
    /// SVG preview file, required when `svg_preview` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_path: Option<PathBuf>,
    /// Units for the job summary
    pub measurement_system: MeasurementSystem,
}

/// Complete job configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Operations applied to the drawing, in order
    pub job: PlotPipeline,
    /// Output locations
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Preparation for a drag knife
    ///
    /// Turns the drawing by 180° (both mirrors), cleans it up, moves it to
    /// the origin, relocates seams and compensates corners for a blade
    /// with the given offset, then routes it row by row.
    pub fn knife_preset(offset_mm: f64) -> Self {
        Self {
            job: PlotPipeline::new()
                .with(Operation::MirrorX)
                .with(Operation::MirrorY)
                .with(Operation::Optimize)
                .with(Operation::Fit)
                .with(Operation::OptimizeCut { offset_mm })
                .with(Operation::BladeOffset { offset_mm })
                .with(Operation::reroute_xy()),
            output: OutputSettings::default(),
        }
    }

    /// Preparation for a pen: the knife preset without the blade steps
    pub fn pen_preset() -> Self {
        Self {
            job: PlotPipeline::new()
                .with(Operation::MirrorX)
                .with(Operation::MirrorY)
                .with(Operation::Optimize)
                .with(Operation::Fit)
                .with(Operation::reroute_xy()),
            output: OutputSettings::default(),
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(
            "Loaded config from {} ({} operations)",
            path.display(),
            config.job.len()
        );
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.job.validate()?;

        if self.output.svg_preview && self.output.svg_path.is_none() {
            return Err(ConfigError::MissingKey("output.svg_path".to_string()).into());
        }

        Ok(())
    }

    /// Platform config directory for hpglkit, e.g. `~/.config/hpglkit`
    pub fn config_directory() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })
    }

    /// Default config file location
    pub fn default_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, or the defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save to `path`, creating its parent directory if needed
    pub fn save_creating_dirs(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.save_to_file(path)
    }
}
