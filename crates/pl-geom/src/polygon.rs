//! Rings, polygons, multipolygons and the point-in-polygon test.
//!
//! # Algorithm
//!
//! Containment uses ray casting with the even-odd rule: a horizontal ray is
//! cast from the query point towards `+x` and the ring edges it crosses are
//! counted.  An odd count means inside.
//!
//! Before counting, the point is checked against every edge with an exact
//! orientation test.  A point on an edge is reported as
//! [`RingLocation::Boundary`], which [`Polygon::contains`] treats as outside
//! for both the outer ring and the holes.
//!
//! # Validation
//!
//! All invariants are checked once, at construction:
//!
//! - a ring has at least 4 points,
//! - its first and last points are equal,
//! - every vertex is finite,
//! - a multipolygon has at least one polygon.
//!
//! Holes are assumed to lie inside the outer ring; this is not verified.

use crate::{BoundingBox, GeomError, GeomResult, Point};

// ── Ring ──────────────────────────────────────────────────────────────────────

/// Where a point lies relative to a single closed ring.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RingLocation {
    Inside,
    Boundary,
    Outside,
}

/// A closed sequence of at least 4 points (first == last).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Ring {
    points: Vec<Point>,
    bbox:   BoundingBox,
}

impl Ring {
    pub fn new(points: Vec<Point>) -> GeomResult<Self> {
        if points.len() < 4 {
            return Err(GeomError::TooFewPoints { got: points.len() });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(GeomError::NonFiniteVertex { index });
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if first != last {
            return Err(GeomError::RingNotClosed {
                first: (first.x(), first.y()),
                last:  (last.x(), last.y()),
            });
        }
        // Non-empty: checked above.
        let bbox = BoundingBox::from_points(points.iter().copied())
            .ok_or(GeomError::TooFewPoints { got: 0 })?;
        Ok(Self { points, bbox })
    }

    /// Build a ring from `(lon, lat)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> GeomResult<Self> {
        Self::new(coords.iter().copied().map(Point::from).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// Edges as `(start, end)` pairs.  The ring is closed, so the last edge
    /// ends at the first point.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Classify `p` as inside, on the boundary of, or outside this ring.
    pub fn locate(&self, p: Point) -> RingLocation {
        if !self.bbox.contains(p) {
            return RingLocation::Outside;
        }
        if self.edges().any(|(a, b)| on_segment(p, a, b)) {
            return RingLocation::Boundary;
        }

        let (px, py) = (p.x(), p.y());
        let mut inside = false;
        for (a, b) in self.edges() {
            let (ax, ay) = (a.x(), a.y());
            let (bx, by) = (b.x(), b.y());
            // Half-open rule on y: each vertex is counted by exactly one of its
            // two edges, so rays through a vertex are not double-counted.
            if (ay > py) != (by > py) {
                let x_cross = ax + (py - ay) * (bx - ax) / (by - ay);
                if px < x_cross {
                    inside = !inside;
                }
            }
        }

        if inside { RingLocation::Inside } else { RingLocation::Outside }
    }
}

impl TryFrom<Vec<Point>> for Ring {
    type Error = GeomError;

    fn try_from(points: Vec<Point>) -> GeomResult<Self> {
        Self::new(points)
    }
}

impl From<Ring> for Vec<Point> {
    fn from(ring: Ring) -> Vec<Point> {
        ring.points
    }
}

/// Exact test: `p` is collinear with `a`-`b` and within the segment's box.
#[inline]
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x() - a.x()) * (p.y() - a.y()) - (b.y() - a.y()) * (p.x() - a.x());
    cross == 0.0
        && p.x() >= a.x().min(b.x())
        && p.x() <= a.x().max(b.x())
        && p.y() >= a.y().min(b.y())
        && p.y() <= a.y().max(b.y())
}

// ── Polygon ───────────────────────────────────────────────────────────────────

/// One outer ring plus zero or more holes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PolygonRings", into = "PolygonRings")
)]
pub struct Polygon {
    exterior: Ring,
    holes:    Vec<Ring>,
}

/// Serde shape of a polygon: the exterior ring followed by its holes, as in
/// GeoJSON.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
struct PolygonRings(Vec<Ring>);

#[cfg(feature = "serde")]
impl TryFrom<PolygonRings> for Polygon {
    type Error = GeomError;

    fn try_from(PolygonRings(mut rings): PolygonRings) -> GeomResult<Self> {
        if rings.is_empty() {
            return Err(GeomError::TooFewPoints { got: 0 });
        }
        let exterior = rings.remove(0);
        Ok(Self::new(exterior, rings))
    }
}

#[cfg(feature = "serde")]
impl From<Polygon> for PolygonRings {
    fn from(p: Polygon) -> Self {
        let mut rings = Vec::with_capacity(1 + p.holes.len());
        rings.push(p.exterior);
        rings.extend(p.holes);
        PolygonRings(rings)
    }
}

impl Polygon {
    /// Rings are validated by [`Ring::new`]; a polygon built from valid rings
    /// cannot fail.
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    pub fn from_exterior(exterior: Ring) -> Self {
        Self::new(exterior, Vec::new())
    }

    /// Build from GeoJSON-style nesting: `rings[0]` is the exterior, the rest
    /// are holes.  Each position is `[lon, lat]`.
    pub fn from_rings(rings: &[Vec<[f64; 2]>]) -> GeomResult<Self> {
        let mut built = rings
            .iter()
            .map(|r| Ring::new(r.iter().copied().map(Point::from).collect()))
            .collect::<GeomResult<Vec<_>>>()?;
        if built.is_empty() {
            return Err(GeomError::TooFewPoints { got: 0 });
        }
        let exterior = built.remove(0);
        Ok(Self::new(exterior, built))
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// The exterior ring's box; holes cannot extend it.
    pub fn bounding_box(&self) -> BoundingBox {
        self.exterior.bounding_box()
    }

    /// `true` if `p` is strictly inside the exterior ring and strictly outside
    /// every hole.
    pub fn contains(&self, p: Point) -> bool {
        self.exterior.locate(p) == RingLocation::Inside
            && self.holes.iter().all(|h| h.locate(p) == RingLocation::Outside)
    }
}

// ── MultiPolygon ──────────────────────────────────────────────────────────────

/// Non-empty union of polygons.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Polygon>", into = "Vec<Polygon>")
)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox:     BoundingBox,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> GeomResult<Self> {
        let bbox = polygons
            .iter()
            .map(Polygon::bounding_box)
            .reduce(BoundingBox::union)
            .ok_or(GeomError::EmptyMultiPolygon)?;
        Ok(Self { polygons, bbox })
    }

    /// Build from GeoJSON `MultiPolygon` coordinate nesting.
    pub fn from_coords(coords: &[Vec<Vec<[f64; 2]>>]) -> GeomResult<Self> {
        let polygons = coords
            .iter()
            .map(|rings| Polygon::from_rings(rings))
            .collect::<GeomResult<Vec<_>>>()?;
        Self::new(polygons)
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// `true` if any constituent polygon contains `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.bbox.contains(p) && self.polygons.iter().any(|poly| poly.contains(p))
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        let bbox = polygon.bounding_box();
        Self { polygons: vec![polygon], bbox }
    }
}

impl TryFrom<Vec<Polygon>> for MultiPolygon {
    type Error = GeomError;

    fn try_from(polygons: Vec<Polygon>) -> GeomResult<Self> {
        Self::new(polygons)
    }
}

impl From<MultiPolygon> for Vec<Polygon> {
    fn from(mp: MultiPolygon) -> Vec<Polygon> {
        mp.polygons
    }
}
