//! Configuration file support for sketchnote.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchnote/config.toml`. Settings include the canvas, drawing
//! defaults, the download destination and the note service.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DownloadSection, DrawingConfig, UploadConfig};

use crate::draw::{BLACK, Color, WHITE};
use crate::export::file::{DownloadConfig, default_download_directory, expand_tilde};
use crate::export::{ExportError, UploadEndpoint};
use crate::input::{SketchSession, ToolState};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const MAX_CANVAS_SIDE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 500
/// background = "white"
///
/// [drawing]
/// default_color = "#0000FF"
/// default_width = "medium"
/// eraser_width = 10.0
///
/// [download]
/// directory = "~/Pictures"
/// filename = "screenshot.png"
///
/// [upload]
/// base_url = "https://samnote.mangasocial.online"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool defaults (color, width preset, eraser width)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Where downloads are written
    #[serde(default)]
    pub download: DownloadSection,

    /// Note service used for uploads
    #[serde(default)]
    pub upload: UploadConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or reset to their default)
    /// and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `canvas.background`: must be opaque
    /// - `drawing.eraser_width`: 1.0 - 100.0
    /// - `upload.timeout_secs`: at least 1 when set
    pub(crate) fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{MAX_CANVAS_SIDE} range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIDE);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{MAX_CANVAS_SIDE} range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIDE);
        }

        match self.canvas.background.to_color() {
            Err(err) => {
                log::warn!("Invalid canvas background ({err}), falling back to white");
                self.canvas.background = types::default_background();
            }
            Ok(color) if color.a < 1.0 => {
                log::warn!("Canvas background must be opaque, ignoring its alpha");
                let channel = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
                self.canvas.background =
                    ColorSpec::Rgb([channel(color.r), channel(color.g), channel(color.b)]);
            }
            Ok(_) => {}
        }

        if let Err(err) = self.drawing.default_color.to_color() {
            log::warn!("Invalid default_color ({err}), falling back to black");
            self.drawing.default_color = types::default_color();
        }

        // NaN fails the range check and clamps to NaN, so reset it explicitly.
        if !self.drawing.eraser_width.is_finite() {
            log::warn!("Invalid eraser_width, falling back to default");
            self.drawing.eraser_width = types::default_eraser_width();
        } else if !(1.0..=100.0).contains(&self.drawing.eraser_width) {
            log::warn!(
                "Invalid eraser_width {:.1}, clamping to 1.0-100.0 range",
                self.drawing.eraser_width
            );
            self.drawing.eraser_width = self.drawing.eraser_width.clamp(1.0, 100.0);
        }

        if self.download.filename.trim().is_empty()
            || self.download.filename.contains(['/', '\\'])
        {
            log::warn!(
                "Invalid download filename '{}', falling back to default",
                self.download.filename
            );
            self.download.filename = types::default_filename();
        }

        if self.upload.timeout_secs == Some(0) {
            log::warn!("upload timeout_secs must be at least 1, disabling the timeout");
            self.upload.timeout_secs = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchnote/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchnote");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file. Unlike [`Config::load`], a missing file
    /// is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    pub fn background(&self) -> Color {
        self.canvas.background.to_color().unwrap_or(WHITE).opaque()
    }

    /// Tool state a new session starts with.
    pub fn tool_state(&self) -> ToolState {
        ToolState {
            color: self.drawing.default_color.to_color().unwrap_or(BLACK),
            width: self.drawing.default_width,
            erase: false,
            eraser_width: self.drawing.eraser_width,
        }
    }

    /// Creates an empty session using the configured canvas and tool defaults.
    pub fn new_session(&self) -> SketchSession {
        SketchSession::with_defaults(
            self.canvas.width,
            self.canvas.height,
            self.background(),
            self.tool_state(),
        )
    }

    pub fn download_config(&self) -> DownloadConfig {
        let directory = self
            .download
            .directory
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(default_download_directory);

        DownloadConfig {
            directory,
            filename: self.download.filename.clone(),
        }
    }

    pub fn upload_endpoint(&self) -> Result<UploadEndpoint, ExportError> {
        UploadEndpoint::parse(
            &self.upload.base_url,
            self.upload.timeout_secs.map(Duration::from_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::RED;
    use crate::input::StrokeWidth;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.background(), WHITE);
        assert_eq!(config.tool_state(), ToolState::default());
        assert_eq!(config.download.filename, "screenshot.png");
        assert_eq!(config.upload.timeout_secs, None);
    }

    #[test]
    fn sections_are_parsed() {
        let config = Config::from_toml(
            r##"
            [canvas]
            width = 320
            background = [10, 20, 30]

            [drawing]
            default_color = "#FF0000"
            default_width = "thick"
            eraser_width = 16.0

            [download]
            directory = "/tmp/sketches"

            [upload]
            base_url = "http://localhost:9000"
            timeout_secs = 5
            "##,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 500);
        assert_eq!(config.background(), Color::from_rgba8(10, 20, 30, 255));

        let tools = config.tool_state();
        assert_eq!(tools.color, RED);
        assert_eq!(tools.width, StrokeWidth::Thick);
        assert_eq!(tools.eraser_width, 16.0);

        let download = config.download_config();
        assert_eq!(download.directory, PathBuf::from("/tmp/sketches"));

        let endpoint = config.upload_endpoint().unwrap();
        assert_eq!(endpoint.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(endpoint.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r##"
            [canvas]
            width = 0
            height = 100000
            background = "not-a-color"

            [drawing]
            default_color = "#12"
            eraser_width = 500.0

            [download]
            filename = "../escape.png"

            [upload]
            timeout_secs = 0
            "##,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_SIDE);
        assert_eq!(config.canvas.background, ColorSpec::from("white"));
        assert_eq!(config.drawing.default_color, ColorSpec::from("black"));
        assert_eq!(config.drawing.eraser_width, 100.0);
        assert_eq!(config.download.filename, "screenshot.png");
        assert_eq!(config.upload.timeout_secs, None);
    }

    #[test]
    fn translucent_background_is_made_opaque() {
        let mut config = Config::from_toml("[canvas]\nbackground = \"#FFF8E100\"\n").unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.background, ColorSpec::Rgb([255, 248, 225]));
        assert_eq!(config.background(), Color::from_rgba8(255, 248, 225, 255));
        assert_eq!(config.new_session().background().a, 1.0);
    }

    #[test]
    fn new_session_uses_configured_canvas() {
        let mut config = Config::default();
        config.canvas.width = 64;
        config.canvas.height = 48;
        config.drawing.default_width = StrokeWidth::Medium;

        let session = config.new_session();
        assert_eq!(session.sketch().width(), 64);
        assert_eq!(session.sketch().height(), 48);
        assert_eq!(session.tools().width, StrokeWidth::Medium);
        assert!(session.sketch().is_empty());
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[drawing]\neraser_width = 0.1\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.drawing.eraser_width, 1.0);

        assert!(Config::load_from(&temp.path().join("missing.toml")).is_err());

        fs::write(&path, "[canvas\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn schema_describes_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["canvas", "drawing", "download", "upload"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
