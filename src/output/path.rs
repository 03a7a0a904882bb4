//! Path data for edge curves.
//!
//! Curves are drawn as a bundled uniform cubic B-spline: the control points
//! are first pulled toward the chord between the first and last point by
//! `1 - tension`, then the spline through them is emitted as one cubic Bezier
//! segment per span. Commands are written without separators
//! (`M0,0L1,1C…`), the compact form of browser path generators.

use crate::geometry::Point;
use crate::output::number::push_number;

// Bezier weights of the uniform cubic B-spline basis.
const B1: [f64; 4] = [0.0, 2.0 / 3.0, 1.0 / 3.0, 0.0];
const B2: [f64; 4] = [0.0, 1.0 / 3.0, 2.0 / 3.0, 0.0];
const B3: [f64; 4] = [0.0, 1.0 / 6.0, 2.0 / 3.0, 1.0 / 6.0];

fn dot4(a: [f64; 4], b: [f64; 4]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Incremental builder of SVG path data.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    d: String,
}

impl PathBuilder {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn pair(&mut self, x: f64, y: f64) {
        push_number(&mut self.d, x);
        self.d.push(',');
        push_number(&mut self.d, y);
    }

    /// Move to a point.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.d.push('M');
        self.pair(p.x, p.y);
        self
    }

    /// Straight line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.d.push('L');
        self.pair(p.x, p.y);
        self
    }

    /// Cubic Bezier to `end` with control points `c1` and `c2`.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, end: Point) -> &mut Self {
        self.d.push('C');
        self.pair(c1.x, c1.y);
        self.d.push(',');
        self.pair(c2.x, c2.y);
        self.d.push(',');
        self.pair(end.x, end.y);
        self
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// The path data.
    #[must_use]
    pub fn finish(self) -> String {
        self.d
    }
}

/// Pull `points` toward the chord from the first to the last point.
///
/// A tension of 1 leaves the points unchanged; 0 puts them on the chord,
/// spaced by index.
#[must_use]
pub fn bundle(points: &[Point], tension: f64) -> Vec<Point> {
    let n = points.len().saturating_sub(1);
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    if n == 0 {
        return points.to_vec();
    }

    let (dx, dy) = (last.x - first.x, last.y - first.y);
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let t = i as f64 / n as f64;
            Point::new(
                tension * p.x + (1.0 - tension) * (first.x + t * dx),
                tension * p.y + (1.0 - tension) * (first.y + t * dy),
            )
        })
        .collect()
}

/// Polyline through `points`.
#[must_use]
pub fn linear_path(points: &[Point]) -> String {
    let mut path = PathBuilder::new();
    for (i, &p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.finish()
}

/// Uniform cubic B-spline through `points`, clamped to the first and last
/// point. Fewer than three points fall back to [`linear_path`].
#[must_use]
pub fn basis_path(points: &[Point]) -> String {
    if points.len() < 3 {
        return linear_path(points);
    }

    let first = points[0];
    let second = points[1];
    let mut xs = [first.x, first.x, first.x, second.x];
    let mut ys = [first.y, first.y, first.y, second.y];

    let mut path = PathBuilder::new();
    path.move_to(first);
    path.line_to(Point::new(dot4(B3, xs), dot4(B3, ys)));

    // The last point is repeated so the spline ends on it.
    let last = points[points.len() - 1];
    for &p in points[2..].iter().chain(std::iter::once(&last)) {
        xs = [xs[1], xs[2], xs[3], p.x];
        ys = [ys[1], ys[2], ys[3], p.y];
        path.cubic_to(
            Point::new(dot4(B1, xs), dot4(B1, ys)),
            Point::new(dot4(B2, xs), dot4(B2, ys)),
            Point::new(dot4(B3, xs), dot4(B3, ys)),
        );
    }

    path.line_to(last);
    path.finish()
}

/// Bundled B-spline through `points` with the given tension.
#[must_use]
pub fn bundle_path(points: &[Point], tension: f64) -> String {
    basis_path(&bundle(points, tension))
}
