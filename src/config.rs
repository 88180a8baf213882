//! Demo configuration, read from an optional TOML file.
//!
//! Every table and field has a default, so an empty file (or no file at all)
//! gives the stock 1920x1080 walkthrough:
//!
//! ```toml
//! [display]
//! title = "Software Rasterizer"
//! width = 1920
//! height = 1080
//! headless = false
//!
//! [projection]
//! distance = 1.0
//! viewport_size = 1.0
//!
//! [demo]
//! fill = "bresenham"          # or "interpolated", "shaded"
//! snapshot_dir = "snapshots"  # optional
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::projection::Projector;
use crate::render::FillStrategy;

/// Largest accepted display width or height.
pub const MAX_DIMENSION: u32 = 16384;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub projection: ProjectionConfig,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Render and snapshot without opening a window.
    pub headless: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Software Rasterizer".to_string(),
            width: 1920,
            height: 1080,
            headless: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance from the eye to the projection plane.
    pub distance: f32,
    pub viewport_size: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            distance: 1.0,
            viewport_size: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Strategy for the generic fill stage.
    pub fill: FillStrategy,
    /// Each presented stage is also saved here as a PNG.
    pub snapshot_dir: Option<PathBuf>,
}

impl Config {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path:?}"))?;
        Self::from_toml_str(&contents).with_context(|| format!("invalid config file {path:?}"))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.width == 0 || display.height == 0 {
            bail!(
                "display size must be non-zero, got {}x{}",
                display.width,
                display.height
            );
        }
        if display.width > MAX_DIMENSION || display.height > MAX_DIMENSION {
            bail!(
                "display size {}x{} exceeds {MAX_DIMENSION} on a side",
                display.width,
                display.height
            );
        }
        let distance = self.projection.distance;
        if !distance.is_finite() || distance <= 0.0 {
            bail!("projection.distance must be positive and finite, got {distance}");
        }
        let viewport = self.projection.viewport_size;
        if viewport.is_nan() || viewport <= 0.0 {
            bail!("projection.viewport_size must be positive, got {viewport}");
        }
        Ok(())
    }

    /// A projector matching the configured display and projection.
    pub fn projector(&self) -> Projector {
        Projector::with_viewport(
            self.display.width,
            self.display.height,
            self.projection.distance,
            self.projection.viewport_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.width, 1920);
        assert_eq!(config.display.height, 1080);
        assert_eq!(config.demo.fill, FillStrategy::Bresenham);
        assert!(config.demo.snapshot_dir.is_none());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = Config::from_toml_str(
            r#"
            [display]
            width = 640
            headless = true

            [demo]
            fill = "shaded"
            snapshot_dir = "out"
            "#,
        )
        .unwrap();

        assert_eq!(config.display.width, 640);
        assert_eq!(config.display.height, 1080);
        assert!(config.display.headless);
        assert_eq!(config.display.title, "Software Rasterizer");
        assert_eq!(config.demo.fill, FillStrategy::Shaded);
        assert_eq!(config.demo.snapshot_dir, Some(PathBuf::from("out")));
        assert_relative_eq!(config.projection.distance, 1.0);
    }

    #[test]
    fn projector_uses_configured_parameters() {
        let config = Config::from_toml_str(
            r#"
            [display]
            width = 800
            height = 600

            [projection]
            distance = 2.0
            viewport_size = 4.0
            "#,
        )
        .unwrap();
        let projector = config.projector();
        assert_eq!(projector.width(), 800);
        assert_eq!(projector.height(), 600);
        assert_relative_eq!(projector.distance(), 2.0);
        assert_relative_eq!(projector.viewport_size(), 4.0);
    }

    #[test]
    fn zero_sized_display_is_rejected() {
        let err = Config::from_toml_str("[display]\nheight = 0").unwrap_err();
        assert!(err.to_string().contains("non-zero"), "{err}");
    }

    #[test]
    fn non_positive_viewport_is_rejected() {
        assert!(Config::from_toml_str("[projection]\nviewport_size = 0.0").is_err());
        assert!(Config::from_toml_str("[projection]\nviewport_size = -1.0").is_err());
    }

    #[test]
    fn oversized_display_is_rejected() {
        let err = Config::from_toml_str("[display]\nwidth = 100000\nheight = 100000").unwrap_err();
        assert!(err.to_string().contains("exceeds"), "{err}");
        assert!(Config::from_toml_str("[display]\nwidth = 16384\nheight = 16384").is_ok());
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let err = Config::from_toml_str("[projection]\ndistance = 0.0").unwrap_err();
        assert!(err.to_string().contains("distance"), "{err}");
        assert!(Config::from_toml_str("[projection]\ndistance = -2.5").is_err());
        assert!(Config::from_toml_str("[projection]\ndistance = inf").is_err());
    }

    #[test]
    fn unknown_fill_strategy_is_rejected() {
        assert!(Config::from_toml_str("[demo]\nfill = \"wireframe\"").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load("/nonexistent/softrast.toml").unwrap_err();
        assert!(format!("{err:#}").contains("softrast.toml"));
    }
}
