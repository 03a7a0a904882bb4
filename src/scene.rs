//! Typed geometry records produced by the layout engine.
//!
//! A [`Scene`] is everything a vector renderer needs: polygons with fill and
//! transform, text placements, and curve control points with opacity. Every
//! record carries the item indices it belongs to, so a presentation layer can
//! link a label to its cells and edges without re-deriving any geometry.

use crate::geometry::{Point, Translate};
use crate::index::CellIndex;
use crate::theme::Theme;

/// Text anchor position for text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

/// The visible region in grid units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// One heatmap cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellRecord {
    /// The item pair this cell shows.
    pub tag: CellIndex,
    /// Matrix value.
    pub value: f64,
    /// Rhombus vertices: top, left, bottom, right.
    pub points: [Point; 4],
    /// Palette entry chosen by the quantize scale.
    pub fill: String,
    /// Cluster translation; `None` when the matrix has no clusters.
    pub transform: Option<Translate>,
}

/// One item label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    /// Item index.
    pub item: usize,
    /// Label text.
    pub text: String,
    /// Anchor point, vertically centered on the text.
    pub anchor: Point,
    /// Cluster translation; `None` when the matrix has no clusters.
    pub transform: Option<Translate>,
}

/// One relationship curve.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// Source item.
    pub from: usize,
    /// Target item.
    pub to: usize,
    /// Spline control points.
    pub points: [Point; 5],
    /// Opacity derived from the edge value.
    pub opacity: f64,
    /// Bundle tension used when the curve is drawn.
    pub tension: f64,
}

impl EdgeRecord {
    /// Whether the edge touches `item`.
    #[must_use]
    pub fn touches(&self, item: usize) -> bool {
        self.from == item || self.to == item
    }
}

/// One colorbar swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchRecord {
    /// Rhombus vertices: top, left, bottom, right.
    pub points: [Point; 4],
    /// Palette entry.
    pub fill: String,
}

/// One colorbar tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickRecord {
    /// Anchor point (also the rotation center).
    pub anchor: Point,
    /// Domain endpoint, already rounded to two decimals.
    pub value: f64,
    /// Horizontal alignment.
    pub text_anchor: TextAnchor,
    /// Rotation in degrees about `anchor`.
    pub rotation: f64,
}

/// The color legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorbarRecord {
    /// Translation applied to swatches and ticks.
    pub shift: Translate,
    /// One swatch per palette entry.
    pub swatches: Vec<SwatchRecord>,
    /// One tick per domain endpoint.
    pub ticks: Vec<TickRecord>,
}

/// Complete laid-out figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Outer width attribute.
    pub width: f64,
    /// Outer height attribute.
    pub height: f64,
    /// Visible region in grid units.
    pub view_box: ViewBox,
    /// Stylesheet.
    pub style: Theme,
    /// Cells in linear-index order.
    pub cells: Vec<CellRecord>,
    /// Labels in item order.
    pub labels: Vec<LabelRecord>,
    /// Edges in input order.
    pub edges: Vec<EdgeRecord>,
    /// Color legend, present when the palette is short enough to fit.
    pub colorbar: Option<ColorbarRecord>,
}

impl Scene {
    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell showing the pair `(a, b)`, in either order.
    #[must_use]
    pub fn cell(&self, a: usize, b: usize) -> Option<&CellRecord> {
        let tag = CellIndex::new(a.min(b), a.max(b));
        self.cells.iter().find(|c| c.tag == tag)
    }

    /// Cells involving `item`.
    pub fn cells_for_item(&self, item: usize) -> impl Iterator<Item = &CellRecord> {
        self.cells.iter().filter(move |c| c.tag.row == item || c.tag.col == item)
    }

    /// Edges touching `item`.
    pub fn edges_for_item(&self, item: usize) -> impl Iterator<Item = &EdgeRecord> {
        self.edges.iter().filter(move |e| e.touches(item))
    }
}
