//! Configuration types for Figura diagram rendering and export.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the command-line front end. Every field is optional; missing
//! fields fall back to the defaults documented on each getter.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`RenderConfig`] - Size mapping and point radius used by the renderer.
//! - [`StyleConfig`] - Document styling such as the background color.
//! - [`ExportConfig`] - Raster export settings.
//!
//! # Example
//!
//! ```
//! # use figura::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().size_exponent(), 1.0);
//! assert_eq!(config.export().png_scale(), 8.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use figura_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Export configuration section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `render` - Renderer settings.
    /// * `style` - Visual styling options.
    /// * `export` - Raster export settings.
    pub fn new(render: RenderConfig, style: StyleConfig, export: ExportConfig) -> Self {
        Self {
            render,
            style,
            export,
        }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }
}

fn default_size_exponent() -> f64 {
    1.0
}

fn default_point_radius() -> f64 {
    0.7
}

fn default_png_scale() -> f32 {
    8.0
}

/// Renderer settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Exponent of the stroke-width and arrow-head size mapping.
    #[serde(default = "default_size_exponent")]
    size_exponent: f64,

    /// Radius of the dot drawn for a `point` primitive, in user units.
    #[serde(default = "default_point_radius")]
    point_radius: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size_exponent: default_size_exponent(),
            point_radius: default_point_radius(),
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    pub fn new(size_exponent: f64, point_radius: f64) -> Self {
        Self {
            size_exponent,
            point_radius,
        }
    }

    /// Returns the size mapping exponent. `1.0` (the default) is the identity.
    pub fn size_exponent(&self) -> f64 {
        self.size_exponent
    }

    /// Returns the point radius. Defaults to `0.7`.
    pub fn point_radius(&self) -> f64 {
        self.point_radius
    }
}

/// Visual styling configuration for rendered documents.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for documents, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a [`StyleConfig`] with the given background color string.
    pub fn new(background_color: Option<String>) -> Self {
        Self { background_color }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

/// Raster export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Output pixels per user unit for PNG export.
    #[serde(default = "default_png_scale")]
    png_scale: f32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            png_scale: default_png_scale(),
        }
    }
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`].
    pub fn new(png_scale: f32) -> Self {
        Self { png_scale }
    }

    /// Returns the PNG scale. Defaults to `8`.
    pub fn png_scale(&self) -> f32 {
        self.png_scale
    }
}
