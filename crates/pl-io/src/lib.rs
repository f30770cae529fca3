//! `pl-io` — host-side encoding and loading for the partner locator.
//!
//! The locator crates define no file format; this crate is what a host uses
//! to rebuild the catalog at startup and to answer queries in bulk.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`document`] | `PartnerDocument` (GeoJSON wire shape) ⇄ `PartnerRecord`   |
//! | [`loader`]   | `load_partners_json`, `load_partners_reader`, `populate`   |
//! | [`queries`]  | `load_queries_reader`, `locate_batch` (CSV in, CSV out)    |
//! | [`error`]    | `LoadError`, `DocumentError`, `LoadResult<T>`              |
//!
//! # Logging
//!
//! Progress is reported through the `log` facade (`debug!` per document,
//! `info!` per file).  Install a logger such as `env_logger` in the binary to
//! see it.

pub mod document;
pub mod error;
pub mod loader;
pub mod queries;


pub use document::{GeoJsonGeometry, PartnerDocument, Position};
pub use error::{DocumentError, LoadError, LoadResult};
pub use loader::{load_partners_json, load_partners_reader, populate};
pub use queries::{MatchRow, load_queries_csv, load_queries_reader, locate_batch};
