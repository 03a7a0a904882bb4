//! Output encoders (SVG markup, path data, number formatting).

pub mod number;
pub mod path;
mod svg;

pub use crate::scene::TextAnchor;
pub use number::fmt_number;
pub use path::{basis_path, bundle, bundle_path, linear_path, PathBuilder};
pub use svg::{escape_xml, stylesheet, SvgElement, SvgEncoder, Transform, HEATMAP_GROUP_ID};
