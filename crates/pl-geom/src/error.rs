//! Geometry error type.
//!
//! Construction errors (`TooFewPoints`, `RingNotClosed`, …) are raised when a
//! ring or polygon is built and never deferred to query time.  The only
//! query-time error is [`GeomError::NonFiniteCoordinate`].

use thiserror::Error;

/// Coarse classification of a [`GeomError`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// Malformed ring, polygon, or multipolygon at construction.
    InvalidGeometry,
    /// Non-finite coordinate supplied where a finite one is required.
    InvalidInput,
}

/// Errors produced by `pl-geom`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    #[error("ring has {got} points; at least 4 are required")]
    TooFewPoints { got: usize },

    #[error("ring is not closed: first point {first:?} differs from last point {last:?}")]
    RingNotClosed { first: (f64, f64), last: (f64, f64) },

    #[error("ring vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },

    #[error("multipolygon must contain at least one polygon")]
    EmptyMultiPolygon,

    #[error("coordinate ({lon}, {lat}) is not finite")]
    NonFiniteCoordinate { lon: f64, lat: f64 },
}

impl GeomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeomError::NonFiniteCoordinate { .. } => ErrorKind::InvalidInput,
            _ => ErrorKind::InvalidGeometry,
        }
    }
}

/// Shorthand result type for `pl-geom`.
pub type GeomResult<T> = Result<T, GeomError>;
