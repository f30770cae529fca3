//! `pl-geom` — geometry primitives for the `partner_locator` workspace.
//!
//! This crate is a dependency of every other `pl-*` crate.  It has no `pl-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`point`]    | `Point` (lon/lat), `BoundingBox`                          |
//! | [`polygon`]  | `Ring`, `Polygon`, `MultiPolygon`, `RingLocation`         |
//! | [`distance`] | `DistanceMetric`, haversine and planar distance           |
//! | [`error`]    | `GeomError`, `GeomResult`, `ErrorKind`                    |
//!
//! # Boundary policy
//!
//! A point lying exactly on any ring edge (outer ring or hole) is **outside**
//! the polygon.  The predicate is total and deterministic: the same point and
//! polygon always produce the same answer on every platform.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!
//! Rings and polygons are re-validated on deserialization.

pub mod distance;
pub mod error;
pub mod point;
pub mod polygon;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use distance::{DistanceMetric, haversine_m, planar};
pub use error::{ErrorKind, GeomError, GeomResult};
pub use point::{BoundingBox, Point};
pub use polygon::{MultiPolygon, Polygon, Ring, RingLocation};

/// `true` if `point` lies strictly inside `polygon` (outer ring, minus holes).
#[inline]
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    polygon.contains(point)
}

/// `true` if any constituent polygon of `area` contains `point`.
#[inline]
pub fn point_in_multi_polygon(point: Point, area: &MultiPolygon) -> bool {
    area.contains(point)
}
