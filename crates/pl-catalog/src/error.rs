//! Catalog error type.

use thiserror::Error;

use pl_geom::GeomError;

use crate::PartnerId;

/// Errors produced by `pl-catalog`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("partner {id} has an invalid location: {source}")]
    InvalidLocation {
        id:     PartnerId,
        #[source]
        source: GeomError,
    },

    #[error("document {document:?} is already registered to partner {holder}")]
    DuplicateDocument { document: String, holder: PartnerId },

    #[error("geometry error: {0}")]
    Geometry(#[from] GeomError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
