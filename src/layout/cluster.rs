//! Translations induced by cluster grouping.
//!
//! Items of a cluster are pushed down together so that consecutive clusters
//! are separated by a gap of `2 * unit`. A cell whose endpoints lie in
//! different clusters is additionally pushed left by `unit` per cluster of
//! distance, which fans the off-diagonal blocks apart.

use crate::geometry::Translate;
use crate::index::CellIndex;

/// Default spacing unit between clusters.
pub const DEFAULT_CLUSTER_OFFSET: f64 = 0.25;

/// Cluster-induced offsets for cells, labels and edge anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterOffsetModel {
    clusters: Option<Vec<u32>>,
    unit: f64,
}

impl ClusterOffsetModel {
    /// Model for a cluster assignment (or `None`) and spacing unit.
    ///
    /// The assignment is expected to be validated (ascending, contiguous).
    #[must_use]
    pub fn new(clusters: Option<Vec<u32>>, unit: f64) -> Self {
        Self { clusters, unit }
    }

    /// Model without clusters: every offset is zero.
    #[must_use]
    pub fn none() -> Self {
        Self::new(None, DEFAULT_CLUSTER_OFFSET)
    }

    /// Whether a cluster assignment is present.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.clusters.is_some()
    }

    /// Spacing unit.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.unit
    }

    /// Highest cluster id (that of the last item), 0 without clusters.
    #[must_use]
    pub fn max_cluster(&self) -> u32 {
        self.clusters.as_ref().and_then(|c| c.last().copied()).unwrap_or(0)
    }

    /// Right edge of the grid for `items` items, widened to make room for
    /// the leftward fan-out of cross-cluster cells.
    #[must_use]
    pub fn x_mid(&self, items: usize) -> f64 {
        0.5 * items as f64 + f64::from(self.max_cluster()) * self.unit
    }

    fn cluster_of(&self, item: usize) -> Option<f64> {
        self.clusters.as_ref().and_then(|c| c.get(item)).map(|&id| f64::from(id))
    }

    /// Vertical shift of an item's label (and of its edge anchors).
    #[must_use]
    pub fn label_offset(&self, item: usize) -> f64 {
        self.cluster_of(item).map_or(0.0, |c| 2.0 * (c - 1.0) * self.unit)
    }

    /// Translation of the cell joining `cell.row` and `cell.col`.
    #[must_use]
    pub fn offset(&self, cell: CellIndex) -> Translate {
        match (self.cluster_of(cell.row), self.cluster_of(cell.col)) {
            (Some(row), Some(col)) => {
                let distance = (row - col).abs();
                Translate::new(
                    -(distance * self.unit),
                    (2.0 * (row - 1.0) + distance) * self.unit,
                )
            }
            _ => Translate::IDENTITY,
        }
    }
}
