//! Stylesheet of the rendered figure.
//!
//! Controls the non-data visual appearance: background, font size, and the
//! strokes of cells, edge curves and node markers.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Figure theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Background color.
    pub background: Rgba,
    /// Font size of labels and colorbar ticks, in grid units.
    pub font_size: f64,
    /// Stroke around heatmap and colorbar diamonds.
    pub cell_stroke: Rgba,
    /// Width of the diamond stroke.
    pub cell_stroke_width: f64,
    /// Stroke of edge curves.
    pub edge_stroke: Rgba,
    /// Width of edge curves.
    pub edge_stroke_width: f64,
    /// Stroke of node markers.
    pub node_stroke: Rgba,
    /// Width of node marker strokes.
    pub node_stroke_width: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// White background, grey strokes.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            background: Rgba::WHITE,
            font_size: 0.5,
            cell_stroke: Rgba::GREY,
            cell_stroke_width: 0.05,
            edge_stroke: Rgba::GREY,
            edge_stroke_width: 0.1,
            node_stroke: Rgba::BLACK,
            node_stroke_width: 0.5,
        }
    }

    /// Borderless cells, for dense matrices where strokes dominate.
    #[must_use]
    pub fn borderless() -> Self {
        Self { cell_stroke_width: 0.0, ..Self::classic() }
    }
}
