//! Configuration types for chart building and rendering.
//!
//! This module provides the configuration structures that control which
//! systems are charted, how they are labeled, which links are drawn, and how
//! the chart is styled. All types implement [`serde::Deserialize`] so they can
//! be loaded from a TOML file; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`Mode`] - Whether the spatial window filter runs.
//! - [`WindowConfig`] - Half-widths of the spatial window.
//! - [`AnnotationConfig`] - Label offsets, emphasis, and short-name rules.
//! - [`StyleConfig`] - Canvas scale and colors for SVG output.
//!
//! Configuration is checked eagerly with [`AppConfig::validate`] before any
//! catalog row is processed.
//!
//! # Example
//!
//! ```
//! # use starchart::config::{AppConfig, Mode};
//! let config = AppConfig::default();
//! assert_eq!(config.mode(), Mode::Windowed);
//! assert!(config.validate().is_ok());
//! ```

use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use serde::Deserialize;
use thiserror::Error;

use starchart_core::{color::Color, geometry::Point};

use crate::{filter::Window, link::LinkSpec};

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid window half-width `{axis}` = {value}: must be a non-negative number")]
    InvalidWindow { axis: &'static str, value: f64 },

    #[error("Invalid label offset for `{name}`: both components must be finite")]
    InvalidOffset { name: String },

    #[error("Invalid style setting `{field}`: {reason}")]
    InvalidStyle { field: &'static str, reason: String },

    #[error("Link #{index} has an empty system name")]
    EmptyLinkName { index: usize },
}

/// Selects whether the spatial window filter runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Chart every row of the catalog.
    FullCatalog,
    /// Chart only rows inside the configured window.
    #[default]
    Windowed,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    mode: Mode,

    #[serde(default)]
    window: WindowConfig,

    #[serde(default)]
    annotation: AnnotationConfig,

    /// Links to draw, in drawing order.
    #[serde(default)]
    links: Vec<LinkSpec>,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the filtering mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns a copy of this configuration running in `mode`.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the window configuration.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// Returns the annotation configuration.
    pub fn annotation(&self) -> &AnnotationConfig {
        &self.annotation
    }

    /// Returns a copy of this configuration with `annotation` replaced.
    pub fn with_annotation(mut self, annotation: AnnotationConfig) -> Self {
        self.annotation = annotation;
        self
    }

    /// Returns the configured links.
    pub fn links(&self) -> &[LinkSpec] {
        &self.links
    }

    /// Returns a copy of this configuration with `links` replaced.
    pub fn with_links(mut self, links: Vec<LinkSpec>) -> Self {
        self.links = links;
        self
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks every setting, reporting the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for negative or non-finite window
    /// half-widths, non-finite label offsets, invalid style settings, and
    /// links with an empty endpoint name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.window.to_window()?;
        self.annotation.validate()?;
        self.style.validate()?;

        for (index, link) in self.links.iter().enumerate() {
            if link.from().trim().is_empty() || link.to().trim().is_empty() {
                return Err(ConfigError::EmptyLinkName { index });
            }
        }

        Ok(())
    }
}

/// Half-widths of the spatial window, in catalog distance units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    y: f64,
    z: f64,
}

impl WindowConfig {
    /// Creates a window configuration from its half-widths.
    pub fn new(y: f64, z: f64) -> Self {
        Self { y, z }
    }

    /// Half-width along the y axis.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Half-width along the z axis.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Builds the filter [`Window`] for these half-widths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWindow`] for a negative or non-finite
    /// half-width.
    pub fn to_window(&self) -> Result<Window, ConfigError> {
        Window::new(self.y, self.z)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { y: 5.0, z: 5.0 }
    }
}

/// Label placement, emphasis, and short-name settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Callout offset used when a system has no override.
    default_offset: Point,

    /// Glyph stripped from catalog names when deriving short names.
    disambiguation_glyph: String,

    /// Short names whose labels are emphasized.
    notable_systems: HashSet<String>,

    /// Per-system callout offsets, keyed by short name.
    label_offsets: HashMap<String, Point>,
}

impl AnnotationConfig {
    /// Returns the callout offset for `short_name`.
    pub fn offset_for(&self, short_name: &str) -> Point {
        self.label_offsets
            .get(short_name)
            .copied()
            .unwrap_or(self.default_offset)
    }

    /// Returns `true` if `short_name` is a notable system.
    pub fn is_notable(&self, short_name: &str) -> bool {
        self.notable_systems.contains(short_name)
    }

    /// Returns the glyph stripped from catalog names.
    pub fn disambiguation_glyph(&self) -> &str {
        &self.disambiguation_glyph
    }

    /// Returns the default callout offset.
    pub fn default_offset(&self) -> Point {
        self.default_offset
    }

    /// Sets the default callout offset.
    pub fn with_default_offset(mut self, offset: Point) -> Self {
        self.default_offset = offset;
        self
    }

    /// Marks `short_name` as notable.
    pub fn with_notable_system(mut self, short_name: impl Into<String>) -> Self {
        self.notable_systems.insert(short_name.into());
        self
    }

    /// Overrides the callout offset for `short_name`.
    pub fn with_label_offset(mut self, short_name: impl Into<String>, offset: Point) -> Self {
        self.label_offsets.insert(short_name.into(), offset);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_offset.is_finite() {
            return Err(ConfigError::InvalidOffset {
                name: "default".to_string(),
            });
        }

        match self
            .label_offsets
            .iter()
            .find(|(_, offset)| !offset.is_finite())
        {
            Some((name, _)) => Err(ConfigError::InvalidOffset { name: name.clone() }),
            None => Ok(()),
        }
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            default_offset: Point::new(0.25, 0.25),
            disambiguation_glyph: "§".to_string(),
            notable_systems: HashSet::new(),
            label_offsets: HashMap::new(),
        }
    }
}

/// Visual styling for SVG output.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Pixels per catalog distance unit.
    scale: f64,
    /// Blank space around the chart, in pixels.
    margin: f64,
    /// Radius of the scatter point markers, in pixels.
    point_radius: f64,
    font_family: String,
    font_size: u16,
    background_color: Option<String>,
    point_color: String,
    label_color: String,
    link_color: String,
}

impl StyleConfig {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn point_radius(&self) -> f64 {
        self.point_radius
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ConfigError> {
        self.background_color
            .as_deref()
            .map(|color| parse_color("background_color", color))
            .transpose()
    }

    pub fn point_color(&self) -> Result<Color, ConfigError> {
        parse_color("point_color", &self.point_color)
    }

    pub fn label_color(&self) -> Result<Color, ConfigError> {
        parse_color("label_color", &self.label_color)
    }

    pub fn link_color(&self) -> Result<Color, ConfigError> {
        parse_color("link_color", &self.link_color)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidStyle {
                field: "scale",
                reason: format!("{} is not a positive number", self.scale),
            });
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::InvalidStyle {
                field: "margin",
                reason: format!("{} is not a non-negative number", self.margin),
            });
        }
        if !self.point_radius.is_finite() || self.point_radius < 0.0 {
            return Err(ConfigError::InvalidStyle {
                field: "point_radius",
                reason: format!("{} is not a non-negative number", self.point_radius),
            });
        }

        self.background_color()?;
        self.point_color()?;
        self.label_color()?;
        self.link_color()?;
        Ok(())
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            scale: 60.0,
            margin: 40.0,
            point_radius: 3.0,
            font_family: "sans-serif".to_string(),
            font_size: 12,
            background_color: None,
            point_color: "black".to_string(),
            label_color: "black".to_string(),
            link_color: "steelblue".to_string(),
        }
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    Color::new(value).map_err(|reason| ConfigError::InvalidStyle { field, reason })
}
