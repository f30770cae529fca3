//! `pl-catalog` — partner records and the in-memory partner catalog.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`ids`]     | `PartnerId` (opaque string identity)                        |
//! | [`record`]  | `PartnerRecord`, `PartnerProfile`                           |
//! | [`catalog`] | `Catalog` (upsert / get / all / candidates)                 |
//! | [`index`]   | `SpatialIndex`, an R-tree over coverage bounding boxes     |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                          |
//!
//! # Concurrency
//!
//! `Catalog` is `Send + Sync`.  Records are stored as `Arc<PartnerRecord>` and
//! replaced whole under a write lock, so a reader sees either the old or the
//! new record for an identity, never a mix.  Iteration returns a snapshot
//! taken at call time.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.         |
//! | `fx-hash` | FxHash instead of SipHash for the internal maps.           |

pub mod catalog;
pub mod error;
pub mod ids;
pub mod index;
pub mod record;


pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use ids::PartnerId;
pub use index::SpatialIndex;
pub use record::{PartnerProfile, PartnerRecord};
