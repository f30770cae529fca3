use thiserror::Error;

use pl_catalog::{CatalogError, PartnerId};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocateError {
    #[error("query coordinate ({lon}, {lat}) is not finite")]
    InvalidInput { lon: f64, lat: f64 },

    #[error("partner {0} not found")]
    NotFound(PartnerId),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

pub type LocateResult<T> = Result<T, LocateError>;
