//! # hmatrix-viz
//!
//! Diamond-grid heatmaps of symmetric matrices, rendered to SVG.
//!
//! The upper triangle of a correlation or adjacency matrix is drawn rotated
//! by 45 degrees, with the item labels along its right edge. Items can be
//! grouped into contiguous clusters, which fan the blocks of the grid apart,
//! and directed relationships between items are drawn as bundled curves next
//! to the labels.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hmatrix_viz::prelude::*;
//!
//! let data = MatrixData::load("data.json")?;
//! let svg = HMatrix::new()
//!     .data(data)
//!     .dimensions(800, 800)
//!     .build()?
//!     .to_svg()?;
//! ```
//!
//! ## Layers
//!
//! - [`index`], [`scale`], [`layout`]: the pure geometry engine, producing a
//!   [`scene::Scene`] of exact coordinates.
//! - [`data`], [`options`], [`theme`]: the JSON input and options documents.
//! - [`output`]: SVG markup and bundled-spline path data.
//! - [`plots`]: the [`plots::HMatrix`] builder tying them together.
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `hmatrix` command-line binary

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in geometry code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and CSS color parsing.
pub mod color;

/// Geometric primitives (points, translations, diamonds).
pub mod geometry;

/// Triangular index mapping between linear indices and item pairs.
pub mod index;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Input Modules
// ============================================================================

/// Matrix data document.
pub mod data;

/// Render options document.
pub mod options;

/// Stylesheet of the rendered figure.
pub mod theme;

// ============================================================================
// Layout and Rendering Modules
// ============================================================================

/// Layout engine producing scenes.
pub mod layout;

/// Typed geometry records.
pub mod scene;

/// Output encoders (SVG, path data).
pub mod output;

/// High-level plot types.
pub mod plots;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for hmatrix-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use hmatrix_viz::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::color::Rgba;
    pub use crate::data::{Edge, MatrixData};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Diamond, Point, Translate};
    pub use crate::index::{CellIndex, IndexMapper};
    pub use crate::layout::layout;
    pub use crate::options::RenderOptions;
    pub use crate::output::SvgEncoder;
    pub use crate::plots::HMatrix;
    pub use crate::scale::{ColorScale, LinearScale, QuantizeScale, Scale};
    pub use crate::scene::Scene;
    pub use crate::theme::Theme;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
