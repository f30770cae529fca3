//! Coordinate and bounding-box types.
//!
//! `Point` stores `f64` longitude (x) and latitude (y).  Unlike a city-scale
//! simulation, coverage areas may span a continent, and single precision
//! would make edge tests flip between platforms.

use std::fmt;

use crate::{GeomError, GeomResult};

// ── Point ─────────────────────────────────────────────────────────────────────

/// An immutable `(x = longitude, y = latitude)` pair.
///
/// `Point::new` accepts any `f64`; use [`Point::try_new`] (or check
/// [`is_finite`](Self::is_finite)) where non-finite input must be rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { x: lon, y: lat }
    }

    /// Like [`Point::new`] but fails with [`GeomError::NonFiniteCoordinate`]
    /// if either coordinate is NaN or infinite.
    pub fn try_new(lon: f64, lat: f64) -> GeomResult<Self> {
        let p = Self::new(lon, lat);
        p.ensure_finite()?;
        Ok(p)
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn lon(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn lat(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn ensure_finite(self) -> GeomResult<()> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(GeomError::NonFiniteCoordinate { lon: self.x, lat: self.y })
        }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<Point> for [f64; 2] {
    #[inline]
    fn from(p: Point) -> [f64; 2] {
        [p.x, p.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Smallest axis-aligned rectangle enclosing a geometry.
///
/// Containment is **inclusive** on every side: the box is a conservative
/// pre-filter and must never reject a point that the exact test accepts.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Box of a single point (zero area).
    #[inline]
    pub fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Box enclosing every point of `points`, or `None` if it is empty.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = Self::from_point(iter.next()?);
        Some(iter.fold(first, |bb, p| bb.expand_to(p)))
    }

    /// Grow the box so that it also covers `p`.
    #[inline]
    pub fn expand_to(self, p: Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box covering both `self` and `other`.
    #[inline]
    pub fn union(self, other: BoundingBox) -> Self {
        self.expand_to(other.min).expand_to(other.max)
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}
