//! Error types for pl-io.

use thiserror::Error;

use pl_catalog::CatalogError;
use pl_geom::GeomError;
use pl_locator::LocateError;

/// Why a single partner document could not become a `PartnerRecord`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DocumentError {
    #[error("{field}: expected GeoJSON type {expected:?}, found {found:?}")]
    WrongType { field: &'static str, expected: &'static str, found: String },

    #[error("{field}: position has {len} coordinates; at least 2 are required")]
    ShortPosition { field: &'static str, len: usize },

    #[error("partner id is empty")]
    EmptyId,

    #[error(transparent)]
    Geometry(#[from] GeomError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors produced while loading partners or running batch queries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("partner document {index}: {source}")]
    Document {
        index:  usize,
        #[source]
        source: DocumentError,
    },

    #[error(transparent)]
    Locate(#[from] LocateError),
}

pub type LoadResult<T> = Result<T, LoadError>;
