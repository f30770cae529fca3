//! `pl-locator` — find the closest partner whose coverage contains a point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`locator`] | `Locator` (filter + rank), `select_closest`                 |
//! | [`service`] | `PartnerLocator`: `upsert`, `get_by_id`, `find_closest_containing` |
//! | [`config`]  | `LocatorConfig`                                             |
//! | [`error`]   | `LocateError`, `LocateResult<T>`                            |
//!
//! # Query model (summary)
//!
//! ```text
//! candidates = catalog.candidates(query)          // R-tree pre-filter or full scan
//! covering   = candidates where coverage ∋ query  // exact, boundary excluded
//! result     = argmin over covering of (distance(query, location), id)
//! ```
//!
//! An empty `covering` set is a normal outcome (`Ok(None)`), not an error.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Rayon filter/rank above `LocatorConfig::parallel_threshold` candidates. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.       |

pub mod config;
pub mod error;
pub mod locator;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::LocatorConfig;
pub use error::{LocateError, LocateResult};
pub use locator::{Locator, select_closest};
pub use service::PartnerLocator;

pub use pl_catalog::{Catalog, PartnerId, PartnerProfile, PartnerRecord};
pub use pl_geom::{DistanceMetric, MultiPolygon, Point, Polygon, Ring};
