//! Configuration for the line demo.
//!
//! YAML file with per-field defaults; precedence is CLI > file > defaults.

use crate::color::Rgba;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Surface size, padding and colors of the demo scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Surface width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Horizontal margin kept free of random endpoints.
    #[serde(default = "default_padding")]
    pub padding_h: u32,

    /// Vertical margin kept free of random endpoints.
    #[serde(default = "default_padding")]
    pub padding_v: u32,

    /// Clear color.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Color of the line itself.
    #[serde(default = "default_line_color")]
    pub line_color: Rgba,

    /// Color of the start marker.
    #[serde(default = "default_start_color")]
    pub start_color: Rgba,

    /// Color of the end marker.
    #[serde(default = "default_end_color")]
    pub end_color: Rgba,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_padding() -> u32 {
    20
}
fn default_background() -> Rgba {
    Rgba::BLACK
}
fn default_line_color() -> Rgba {
    Rgba::WHITE
}
fn default_start_color() -> Rgba {
    Rgba::RED
}
fn default_end_color() -> Rgba {
    Rgba::GREEN
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            padding_h: default_padding(),
            padding_v: default_padding(),
            background: default_background(),
            line_color: default_line_color(),
            start_color: default_start_color(),
            end_color: default_end_color(),
        }
    }
}

impl DemoConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location (`<config dir>/bresenham-line/config.yaml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bresenham-line").join("config.yaml"))
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::debug!("using default config: {e}");
            Self::default()
        })
    }

    /// Check that the padded area leaves room for at least one endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the surface is empty or the padding eats
    /// it entirely.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "surface size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.span_h() == 0 || self.span_v() == 0 {
            return Err(Error::Config(format!(
                "padding {}x{} leaves no drawable area on a {}x{} surface",
                self.padding_h, self.padding_v, self.width, self.height
            )));
        }
        Ok(())
    }

    /// Number of candidate x coordinates for random endpoints.
    #[must_use]
    pub fn span_h(&self) -> u32 {
        self.width.saturating_sub(self.padding_h.saturating_mul(2))
    }

    /// Number of candidate y coordinates for random endpoints.
    #[must_use]
    pub fn span_v(&self) -> u32 {
        self.height.saturating_sub(self.padding_v.saturating_mul(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = DemoConfig::new();

        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.padding_h, 20);
        assert_eq!(config.padding_v, 20);
        assert_eq!(config.background, Rgba::BLACK);
        assert_eq!(config.line_color, Rgba::WHITE);
        assert_eq!(config.start_color, Rgba::RED);
        assert_eq!(config.end_color, Rgba::GREEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = DemoConfig::parse("width: 320").unwrap();

        assert_eq!(config.width, 320);
        assert_eq!(config.height, 600);
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r##"
width: 200
height: 100
padding_h: 5
padding_v: 10
background: "#101010"
line_color: "#ffff00"
start_color: "#ff000080"
end_color: "#00ff00"
"##;

        let config = DemoConfig::parse(yaml).unwrap();

        assert_eq!(config.span_h(), 190);
        assert_eq!(config.span_v(), 80);
        assert_eq!(config.background, Rgba::rgb(16, 16, 16));
        assert_eq!(config.line_color, Rgba::rgb(255, 255, 0));
        assert_eq!(config.start_color, Rgba::RED.with_alpha(128));
    }

    #[test]
    fn test_config_parse_bad_color() {
        let err = DemoConfig::parse("line_color: white").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_config_parse_error_includes_line() {
        let yaml = r#"
width: 100
height: not_a_number
"#;

        let err = DemoConfig::parse(yaml).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains('3'), "Error should include line number");
    }

    #[test]
    fn test_config_rejects_padding_without_area() {
        let err = DemoConfig::parse("width: 40\npadding_h: 20").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = DemoConfig::parse("height: 0").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = DemoConfig { width: 64, line_color: Rgba::BLUE, ..DemoConfig::default() };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(yaml.contains("#0000ff"));
        assert_eq!(DemoConfig::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "width: 123\nheight: 77\n").unwrap();

        let config = DemoConfig::load(&path).unwrap();
        assert_eq!((config.width, config.height), (123, 77));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = DemoConfig::load_or_default("/nonexistent/path");
        assert_eq!(config, DemoConfig::default());
    }
}
