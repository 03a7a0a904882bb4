//! High-level plot types.
//!
//! Provides ready-to-use visualization types with builder APIs.

mod hmatrix;

pub use hmatrix::HMatrix;
