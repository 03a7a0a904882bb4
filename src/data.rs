//! Input matrix document: labels, upper-triangular values, palette, and the
//! optional cluster assignment and relationship edges.
//!
//! The JSON layout is
//!
//! ```json
//! {
//!   "labels": ["A", "B", "C"],
//!   "values": [0.1, 0.5, 0.9],
//!   "value_domain": [0, 1],
//!   "value_colors": ["#fff", "#000"],
//!   "clusters": [0, 0, 1],
//!   "edges": [{ "from": 0, "to": 2, "value": 0.8 }]
//! }
//! ```
//!
//! `values` enumerates the pairs `(row, col)`, `row < col`, column by column
//! (see [`crate::index`]).

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use trueno::Vector;

use crate::error::{Error, Result};
use crate::index::pair_count;

/// A directed relationship between two items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source item.
    pub from: usize,
    /// Target item.
    pub to: usize,
    /// Strength, interpreted against the edge value range of the options.
    pub value: f64,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(from: usize, to: usize, value: f64) -> Self {
        Self { from, to, value }
    }

    /// Index distance between the two endpoints.
    #[must_use]
    pub const fn span(&self) -> usize {
        self.from.abs_diff(self.to)
    }
}

/// The matrix to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixData {
    /// One label per item.
    pub labels: Vec<String>,
    /// Upper-triangular values in canonical order.
    pub values: Vec<f64>,
    /// `[min, max]` of the color scale.
    pub value_domain: [f64; 2],
    /// Palette, one CSS color per quantize bucket.
    pub value_colors: Vec<String>,
    /// Cluster id per item (ascending, contiguous).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<u32>>,
    /// Relationship overlays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

/// Distribution of the matrix values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueSummary {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Mean value.
    pub mean: f64,
    /// Number of values outside `value_domain`.
    pub out_of_domain: usize,
}

impl MatrixData {
    /// Create a matrix without clusters or edges.
    #[must_use]
    pub fn new(
        labels: Vec<String>,
        values: Vec<f64>,
        value_domain: [f64; 2],
        value_colors: Vec<String>,
    ) -> Self {
        Self { labels, values, value_domain, value_colors, clusters: None, edges: None }
    }

    /// Set the cluster assignment.
    #[must_use]
    pub fn clusters(mut self, clusters: Vec<u32>) -> Self {
        self.clusters = Some(clusters);
        self
    }

    /// Set the relationship edges.
    #[must_use]
    pub fn edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed JSON, [`Error::Schema`] for
    /// missing or mistyped fields, and the [`Self::validate`] errors.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Parse and validate a JSON document from a reader.
    ///
    /// # Errors
    ///
    /// See [`Self::from_json_str`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let data: Self = serde_json::from_reader(reader)?;
        data.validate()?;
        Ok(data)
    }

    /// Load and validate a JSON document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise see
    /// [`Self::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading matrix data");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.labels.len()
    }

    /// Highest cluster id, 0 without clusters.
    #[must_use]
    pub fn max_cluster(&self) -> u32 {
        self.clusters.as_ref().and_then(|c| c.last().copied()).unwrap_or(0)
    }

    /// The edges, empty when none were given.
    #[must_use]
    pub fn edge_list(&self) -> &[Edge] {
        self.edges.as_deref().unwrap_or(&[])
    }

    /// Check every dimensional and cluster invariant.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyData`] without labels
    /// - [`Error::DimensionMismatch`] when `values` or `clusters` have the
    ///   wrong length
    /// - [`Error::ScaleDomain`] for an empty palette or a `value_domain` that
    ///   is not an increasing interval
    /// - [`Error::ClusterContract`] for descending or skipping cluster ids
    /// - [`Error::EdgeOutOfRange`] for an edge endpoint `>= n`
    pub fn validate(&self) -> Result<()> {
        let n = self.item_count();
        if n == 0 {
            return Err(Error::EmptyData);
        }

        let pairs = pair_count(n);
        if self.values.len() != pairs {
            return Err(Error::DimensionMismatch {
                what: "values",
                expected: pairs,
                actual: self.values.len(),
            });
        }

        if self.value_colors.is_empty() {
            return Err(Error::ScaleDomain("value_colors must not be empty".to_string()));
        }

        let [min, max] = self.value_domain;
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(Error::ScaleDomain(format!(
                "value_domain [{min}, {max}] must be an increasing finite interval"
            )));
        }

        if let Some(clusters) = &self.clusters {
            if clusters.len() != n {
                return Err(Error::DimensionMismatch {
                    what: "clusters",
                    expected: n,
                    actual: clusters.len(),
                });
            }
            for (item, pair) in clusters.windows(2).enumerate() {
                let (previous, current) = (pair[0], pair[1]);
                if current != previous && previous.checked_add(1) != Some(current) {
                    return Err(Error::ClusterContract { item: item + 1, previous, current });
                }
            }
        }

        for (index, edge) in self.edge_list().iter().enumerate() {
            if edge.from >= n || edge.to >= n {
                return Err(Error::EdgeOutOfRange { index, from: edge.from, to: edge.to, items: n });
            }
        }

        Ok(())
    }

    /// Summarize the values and report how many fall outside the domain.
    ///
    /// Returns `None` for a matrix with fewer than two items.
    #[must_use]
    pub fn summary(&self) -> Option<ValueSummary> {
        if self.values.is_empty() {
            return None;
        }

        // SIMD min/max/mean on an f32 copy; the figures are diagnostic only.
        let vec = Vector::from_vec(self.values.iter().map(|&v| v as f32).collect::<Vec<f32>>());
        let [lo, hi] = self.value_domain;
        let out_of_domain = self.values.iter().filter(|&&v| v < lo || v > hi).count();

        let summary = ValueSummary {
            min: f64::from(vec.min().unwrap_or(f32::NAN)),
            max: f64::from(vec.max().unwrap_or(f32::NAN)),
            mean: f64::from(vec.mean().unwrap_or(f32::NAN)),
            out_of_domain,
        };

        debug!(
            min = summary.min,
            max = summary.max,
            mean = summary.mean,
            "matrix value summary"
        );
        if out_of_domain > 0 {
            warn!(
                count = out_of_domain,
                domain_min = lo,
                domain_max = hi,
                "values outside value_domain are clamped to the boundary colors"
            );
        }

        Some(summary)
    }
}
