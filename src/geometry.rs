//! Geometric primitives for the diamond grid.
//!
//! All coordinates are in grid units: one matrix cell is a rhombus one unit
//! wide and one unit tall, and consecutive labels are one unit apart.

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Apply a translation.
    #[must_use]
    pub fn translated(self, by: Translate) -> Self {
        Self::new(self.x + by.dx, self.y + by.dy)
    }
}

/// A 2D translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Translate {
    /// Horizontal shift.
    pub dx: f64,
    /// Vertical shift.
    pub dy: f64,
}

impl Translate {
    /// The identity translation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0);

    /// Create a new translation.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Vertical-only translation.
    #[must_use]
    pub const fn vertical(dy: f64) -> Self {
        Self::new(0.0, dy)
    }

    /// Whether this translation moves nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// A unit rhombus of the 45°-rotated grid, described by its top vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Diamond {
    /// Top vertex.
    pub apex: Point,
}

impl Diamond {
    /// Create a diamond from its top vertex.
    #[must_use]
    pub const fn from_apex(apex: Point) -> Self {
        Self { apex }
    }

    /// Diamond occupying grid position (`row`, `lane`), where `lane` is the
    /// zero-based diagonal (`col - 1`) and `x_mid` the grid's right edge.
    #[must_use]
    pub fn at(x_mid: f64, row: usize, lane: usize) -> Self {
        let (row, lane) = (row as f64, lane as f64);
        Self::from_apex(Point::new(
            x_mid - 0.5 * (lane + 1.0) + 0.5 * row,
            0.5 * lane + 0.5 * row + 0.5,
        ))
    }

    /// Vertices in drawing order: top, left, bottom, right.
    #[must_use]
    pub fn vertices(&self) -> [Point; 4] {
        let Point { x, y } = self.apex;
        [
            Point::new(x, y),
            Point::new(x - 0.5, y + 0.5),
            Point::new(x, y + 1.0),
            Point::new(x + 0.5, y + 0.5),
        ]
    }

    /// Center of the diamond.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.apex.x, self.apex.y + 0.5)
    }
}
