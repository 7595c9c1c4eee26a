use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Names and markers the index recognizes.
///
/// The defaults match the Supernova-style exports this crate was written
/// against; every field can be overridden from a TOML file, and omitted
/// fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Primary dark theme id.
    pub dark_theme: String,
    /// Primary light theme id.
    pub light_theme: String,
    /// Substrings probed, in order, against a source path to infer a theme id.
    pub path_markers: Vec<String>,
    /// Collection option name for `ColorStyle::ColorStyles`.
    pub color_collection: String,
    /// Collection option name for `ColorStyle::BrandColorStyles`.
    pub brand_collection: String,
    pub gradient_marker: String,
    pub gradient_suffix: String,
    pub reserved_colors: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            dark_theme: "Dark".into(),
            light_theme: "Light".into(),
            path_markers: vec![
                "LightUI".into(),
                "DarkUI".into(),
                "Still".into(),
                "Set".into(),
            ],
            color_collection: "Color Styles".into(),
            brand_collection: "Brand Color Styles".into(),
            gradient_marker: "GradientBase".into(),
            gradient_suffix: "GB".into(),
            reserved_colors: vec!["Black".into(), "White".into()],
        }
    }
}

impl IndexConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Whether `theme_id` is one of the two primary theme ids.
    pub fn is_primary_theme(&self, theme_id: &str) -> bool {
        theme_id == self.dark_theme || theme_id == self.light_theme
    }

    /// First path marker contained in `source_path`.
    ///
    /// Markers are probed in list order, not by position in the path. The
    /// default list puts `LightUI`/`DarkUI` ahead of the brand markers
    /// `Still`/`Set`: a brand export usually lives under a brand directory
    /// and names its UI variant further down, and the variant is the theme.
    pub fn theme_for_path(&self, source_path: &str) -> Option<&str> {
        self.path_markers
            .iter()
            .map(String::as_str)
            .find(|marker| source_path.contains(marker))
    }
}
