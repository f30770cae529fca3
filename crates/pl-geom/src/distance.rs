//! Point-to-point distance metrics.
//!
//! Both metrics are pure `f64` functions of their inputs.  `Planar` is the
//! default.  For a fixed query point the ordering they induce over candidates
//! is reproducible; callers break exact ties on identity, never on
//! floating-point noise.

use crate::Point;

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Which distance model a locator ranks candidates with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DistanceMetric {
    /// Euclidean distance on raw degrees, as a geometry `ST_Distance` in
    /// SRID 4326 measures it.  Built only from IEEE-754 arithmetic, so results
    /// are bit-identical on every platform.
    #[default]
    Planar,
    /// Great-circle distance in metres.
    Haversine,
}

impl DistanceMetric {
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        match self {
            DistanceMetric::Haversine => haversine_m(a, b),
            DistanceMetric::Planar    => planar(a, b),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceMetric::Haversine => "haversine",
            DistanceMetric::Planar    => "planar",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Haversine great-circle distance in metres.
pub fn haversine_m(a: Point, b: Point) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    // Rounding can push `h` a hair above 1 for antipodal points.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Euclidean distance on raw coordinates.
///
/// Basic IEEE-754 operations only; no libm calls.
#[inline]
pub fn planar(a: Point, b: Point) -> f64 {
    let dx = b.x() - a.x();
    let dy = b.y() - a.y();
    (dx * dx + dy * dy).sqrt()
}

impl Point {
    /// Haversine distance to `other` in metres.
    #[inline]
    pub fn distance_m(self, other: Point) -> f64 {
        haversine_m(self, other)
    }
}
