//! Render options.
//!
//! Loaded from a JSON document; every key is optional and missing keys take
//! their defaults, so a partial options file merges over the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::theme::Theme;

/// Options controlling canvas size, edge scaling and layout constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Canvas height (outer `height` attribute).
    #[serde(default = "default_height")]
    pub height: f64,

    /// Canvas width (outer `width` attribute).
    #[serde(default = "default_width")]
    pub width: f64,

    /// Edge value mapped to opacity 0.
    #[serde(default = "default_edge_min_val")]
    pub edge_min_val: f64,

    /// Edge value mapped to opacity 1.
    #[serde(default = "default_edge_max_val")]
    pub edge_max_val: f64,

    /// Horizontal clearance between the labels and the start of edge curves.
    #[serde(default = "default_edge_offset")]
    pub edge_offset: f64,

    /// Spacing unit between clusters.
    #[serde(default = "default_cluster_offset")]
    pub cluster_offset: f64,

    /// Horizontal translation of the colorbar strip.
    #[serde(default = "default_colorbar_shift")]
    pub colorbar_shift: f64,

    /// Clamp edge opacity into `[0, 1]` for values outside the edge range.
    #[serde(default)]
    pub clamp_edge_opacity: bool,

    /// Bundle tension of edge curves; 1.0 draws the plain B-spline.
    #[serde(default = "default_edge_tension")]
    pub edge_tension: f64,

    /// Stylesheet.
    #[serde(default)]
    pub style: Theme,
}

fn default_height() -> f64 {
    1000.0
}
fn default_width() -> f64 {
    1000.0
}
fn default_edge_min_val() -> f64 {
    0.0
}
fn default_edge_max_val() -> f64 {
    1.0
}
fn default_edge_offset() -> f64 {
    4.0
}
fn default_cluster_offset() -> f64 {
    0.25
}
fn default_colorbar_shift() -> f64 {
    -2.0
}
fn default_edge_tension() -> f64 {
    1.0
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            edge_min_val: default_edge_min_val(),
            edge_max_val: default_edge_max_val(),
            edge_offset: default_edge_offset(),
            cluster_offset: default_cluster_offset(),
            colorbar_shift: default_colorbar_shift(),
            clamp_edge_opacity: false,
            edge_tension: default_edge_tension(),
            style: Theme::default(),
        }
    }
}

impl RenderOptions {
    /// Creates options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size.
    #[must_use]
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the edge value range mapped to opacity `[0, 1]`.
    #[must_use]
    pub fn edge_range(mut self, min: f64, max: f64) -> Self {
        self.edge_min_val = min;
        self.edge_max_val = max;
        self
    }

    /// Set the horizontal clearance of edge curves.
    #[must_use]
    pub fn edge_offset(mut self, offset: f64) -> Self {
        self.edge_offset = offset;
        self
    }

    /// Clamp edge opacity into `[0, 1]`.
    #[must_use]
    pub fn clamp_edge_opacity(mut self, clamp: bool) -> Self {
        self.clamp_edge_opacity = clamp;
        self
    }

    /// Set the stylesheet.
    #[must_use]
    pub fn style(mut self, style: Theme) -> Self {
        self.style = style;
        self
    }

    /// Parses options from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a parse or schema error, or a validation error.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading render options");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Loads options with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default render options");
            Self::default()
        })
    }

    /// Check that the numeric options are usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ScaleDomain`] for non-finite values or an empty edge
    /// value range.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("height", self.height),
            ("width", self.width),
            ("edge_min_val", self.edge_min_val),
            ("edge_max_val", self.edge_max_val),
            ("edge_offset", self.edge_offset),
            ("cluster_offset", self.cluster_offset),
            ("colorbar_shift", self.colorbar_shift),
            ("edge_tension", self.edge_tension),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::ScaleDomain(format!("{name} must be finite, got {value}")));
        }

        if self.edge_min_val == self.edge_max_val {
            return Err(Error::ScaleDomain(format!(
                "edge_min_val and edge_max_val must differ (both {})",
                self.edge_min_val
            )));
        }

        Ok(())
    }
}
