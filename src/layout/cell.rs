//! Cell and label geometry of the diamond grid.
//!
//! Labels run down a vertical line at `x_mid`, one unit apart. The cell for
//! items `row < col` is the rhombus whose right and bottom edges face the two
//! labels, so it sits `col - row` half-units to the left of the label line.

use crate::geometry::{Diamond, Point, Translate};
use crate::index::{CellIndex, IndexMapper};
use crate::layout::cluster::ClusterOffsetModel;

/// Geometry of the cells and labels of one matrix.
#[derive(Debug, Clone, Copy)]
pub struct CellGeometry<'a> {
    mapper: IndexMapper,
    x_mid: f64,
    clusters: &'a ClusterOffsetModel,
}

impl<'a> CellGeometry<'a> {
    /// Geometry for `items` items under a cluster model.
    #[must_use]
    pub fn new(items: usize, clusters: &'a ClusterOffsetModel) -> Self {
        Self { mapper: IndexMapper::new(items), x_mid: clusters.x_mid(items), clusters }
    }

    /// Right edge of the grid (the label line).
    #[must_use]
    pub fn x_mid(&self) -> f64 {
        self.x_mid
    }

    /// The index mapper for this matrix.
    #[must_use]
    pub fn mapper(&self) -> IndexMapper {
        self.mapper
    }

    /// Rhombus of linear cell `i`, before the cluster transform.
    #[must_use]
    pub fn cell_diamond(&self, i: usize) -> Diamond {
        let cell = IndexMapper::decode(i);
        Diamond::at(self.x_mid, cell.row, cell.lane())
    }

    /// Vertices of linear cell `i`: top, left, bottom, right.
    #[must_use]
    pub fn cell_polygon(&self, i: usize) -> [Point; 4] {
        self.cell_diamond(i).vertices()
    }

    /// Cluster translation of linear cell `i`.
    #[must_use]
    pub fn cell_transform(&self, i: usize) -> Translate {
        self.clusters.offset(IndexMapper::decode(i))
    }

    /// The item pair shown by linear cell `i`.
    #[must_use]
    pub fn cell_tag(&self, i: usize) -> CellIndex {
        IndexMapper::decode(i)
    }

    /// Label anchor of `item`, before the cluster transform.
    #[must_use]
    pub fn label_anchor(&self, item: usize) -> Point {
        Point::new(self.x_mid, item as f64 + 0.5)
    }

    /// Cluster translation of the label of `item`.
    #[must_use]
    pub fn label_transform(&self, item: usize) -> Translate {
        Translate::vertical(self.clusters.label_offset(item))
    }
}
