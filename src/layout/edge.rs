//! Bundled relationship curves to the right of the label column.
//!
//! Each edge leaves its source label horizontally, bulges out to the right in
//! proportion to the index distance between its endpoints, and returns to the
//! target label. Nested edges therefore never cross.

use crate::data::Edge;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::layout::cluster::ClusterOffsetModel;
use crate::scale::{LinearScale, Scale};

/// Fraction of the bulge at which the shoulder control points sit.
const SHOULDER: f64 = 0.7;

/// Control points and opacity of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCurve {
    /// Spline control points: start, shoulder, apex, shoulder, end.
    pub points: [Point; 5],
    /// Opacity from the edge value.
    pub opacity: f64,
}

/// Generator of edge curves for one matrix.
#[derive(Debug, Clone)]
pub struct EdgeCurveGenerator<'a> {
    items: usize,
    x_mid: f64,
    edge_offset: f64,
    opacity: LinearScale,
    clusters: &'a ClusterOffsetModel,
}

impl<'a> EdgeCurveGenerator<'a> {
    /// Create a generator.
    ///
    /// `edge_range` is mapped to opacity `[0, 1]`; with `clamp_opacity`
    /// values outside it saturate instead of extrapolating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for a matrix without items, and a scale
    /// error if the edge range is empty or not finite.
    pub fn new(
        items: usize,
        edge_offset: f64,
        edge_range: (f64, f64),
        clamp_opacity: bool,
        clusters: &'a ClusterOffsetModel,
    ) -> Result<Self> {
        if items == 0 {
            return Err(Error::EmptyData);
        }
        let opacity = LinearScale::new(edge_range, (0.0, 1.0))?.clamp(clamp_opacity);
        Ok(Self { items, x_mid: clusters.x_mid(items), edge_offset, opacity, clusters })
    }

    /// Horizontal bulge of an edge spanning `span` items.
    ///
    /// The longest possible edge (first to last item) reaches
    /// `x_mid - edge_offset` past the curve start. Self-loops, and every
    /// edge of a single-item matrix, have no reach.
    #[must_use]
    pub fn reach(&self, span: usize) -> f64 {
        if span == 0 || self.items < 2 {
            return 0.0;
        }
        (self.x_mid - self.edge_offset) * span as f64 / (self.items - 1) as f64
    }

    /// Opacity of an edge value.
    #[must_use]
    pub fn opacity(&self, value: f64) -> f64 {
        self.opacity.scale(value)
    }

    /// Control points and opacity of `edge`.
    #[must_use]
    pub fn edge_curve(&self, edge: &Edge) -> EdgeCurve {
        let from_ofs = self.clusters.label_offset(edge.from);
        let to_ofs = self.clusters.label_offset(edge.to);
        let (from, to) = (edge.from as f64, edge.to as f64);

        let y_from = from + from_ofs + 0.5;
        let y_to = to + to_ofs + 0.5;
        let y_apex = 0.5 * (from + to + from_ofs + to_ofs + 1.0);

        let x0 = self.x_mid + self.edge_offset;
        let len = self.reach(edge.span());

        EdgeCurve {
            points: [
                Point::new(x0, y_from),
                Point::new(x0 + SHOULDER * len, y_from),
                Point::new(x0 + len, y_apex),
                Point::new(x0 + SHOULDER * len, y_to),
                Point::new(x0, y_to),
            ],
            opacity: self.opacity(edge.value),
        }
    }
}
