//! Linear indexing of the strict upper triangle of an `n x n` matrix.
//!
//! Pairs `(row, col)` with `row < col` are enumerated column by column:
//! `(0,1), (0,2), (1,2), (0,3), (1,3), (2,3), ...`. Column `col` therefore
//! starts at the triangular number `col * (col - 1) / 2`.

use crate::error::{Error, Result};

/// A decoded matrix position. `row < col` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex {
    /// Smaller item index.
    pub row: usize,
    /// Larger item index.
    pub col: usize,
}

impl CellIndex {
    /// Create a new cell index.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Zero-based diagonal the cell is drawn on (`col - 1`).
    #[must_use]
    pub const fn lane(&self) -> usize {
        self.col - 1
    }
}

/// Bijection between linear triangular indices and [`CellIndex`] pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapper {
    items: usize,
}

/// Number of unordered pairs among `n` items.
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n * (n - 1) / 2
    }
}

const fn column_start(col: usize) -> usize {
    col * col.saturating_sub(1) / 2
}

impl IndexMapper {
    /// Create a mapper for a matrix of `items` items.
    #[must_use]
    pub const fn new(items: usize) -> Self {
        Self { items }
    }

    /// Number of items.
    #[must_use]
    pub const fn items(&self) -> usize {
        self.items
    }

    /// Number of linear indices (`items * (items - 1) / 2`).
    #[must_use]
    pub const fn pairs(&self) -> usize {
        pair_count(self.items)
    }

    /// Decode a linear index into its `(row, col)` pair.
    ///
    /// The column is estimated with the inverse triangular-number formula and
    /// then corrected against exact integer bounds, so the result is exact for
    /// every `i` even where the square root rounds the wrong way.
    #[must_use]
    pub fn decode(i: usize) -> CellIndex {
        let estimate = 0.5 * (1.0 + (8.0 * (i as f64 + 1.0) - 7.0).sqrt());
        let mut col = (estimate.floor() as usize).max(1);

        while column_start(col) > i {
            col -= 1;
        }
        while column_start(col + 1) <= i {
            col += 1;
        }

        CellIndex::new(i - column_start(col), col)
    }

    /// Encode a `(row, col)` pair into its linear index.
    ///
    /// Callers must pass `row < col`.
    #[must_use]
    pub const fn encode(row: usize, col: usize) -> usize {
        column_start(col) + row
    }

    /// Checked [`Self::decode`] against this mapper's matrix size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `i >= self.pairs()`.
    pub fn try_decode(&self, i: usize) -> Result<CellIndex> {
        if i >= self.pairs() {
            return Err(Error::IndexOutOfRange { index: i, pairs: self.pairs() });
        }
        Ok(Self::decode(i))
    }

    /// Checked [`Self::encode`]: the pair is normalized so the smaller index
    /// is the row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPair`] for a diagonal pair or an item outside
    /// the matrix.
    pub fn try_encode(&self, a: usize, b: usize) -> Result<usize> {
        let (row, col) = if a < b { (a, b) } else { (b, a) };
        if row == col || col >= self.items {
            return Err(Error::InvalidPair { row, col, items: self.items });
        }
        Ok(Self::encode(row, col))
    }

    /// Iterate over all cells in linear-index order.
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> {
        (0..self.pairs()).map(Self::decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_three_items() {
        assert_eq!(IndexMapper::decode(0), CellIndex::new(0, 1));
        assert_eq!(IndexMapper::decode(1), CellIndex::new(0, 2));
        assert_eq!(IndexMapper::decode(2), CellIndex::new(1, 2));
    }

    #[test]
    fn test_canonical_order_four_items() {
        let cells: Vec<_> = IndexMapper::new(4).cells().map(|c| (c.row, c.col)).collect();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(0), 0);
        assert_eq!(pair_count(1), 0);
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(5), 10);
        assert_eq!(IndexMapper::new(30).pairs(), 435);
    }

    #[test]
    fn test_triangular_boundaries_large() {
        // First and last index of a column, far beyond where f64 sqrt is exact
        // for every operand.
        for col in [1usize, 2, 1_000, 94_906_265, 3_037_000_499] {
            let start = col * (col - 1) / 2;
            assert_eq!(IndexMapper::decode(start), CellIndex::new(0, col));
            assert_eq!(IndexMapper::decode(start + col - 1), CellIndex::new(col - 1, col));
        }
    }

    #[test]
    fn test_try_decode_out_of_range() {
        let mapper = IndexMapper::new(3);
        assert!(mapper.try_decode(2).is_ok());
        assert!(matches!(
            mapper.try_decode(3),
            Err(Error::IndexOutOfRange { index: 3, pairs: 3 })
        ));
    }

    #[test]
    fn test_try_encode_normalizes_pair() {
        let mapper = IndexMapper::new(4);
        assert_eq!(mapper.try_encode(3, 1).unwrap(), 4);
        assert!(mapper.try_encode(2, 2).is_err());
        assert!(mapper.try_encode(0, 4).is_err());
    }

    #[test]
    fn test_try_encode_huge_item_is_error() {
        let mapper = IndexMapper::new(4);
        assert!(matches!(
            mapper.try_encode(0, usize::MAX),
            Err(Error::InvalidPair { row: 0, col: usize::MAX, items: 4 })
        ));
        assert!(matches!(
            mapper.try_encode(usize::MAX, usize::MAX),
            Err(Error::InvalidPair { .. })
        ));
    }

    #[test]
    fn test_lane() {
        assert_eq!(CellIndex::new(0, 1).lane(), 0);
        assert_eq!(CellIndex::new(2, 5).lane(), 4);
    }
}

// ============================================================================
// Property-based tests with proptest
// ============================================================================
