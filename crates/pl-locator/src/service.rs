//! Host-facing facade.
//!
//! A network service or CLI holds one [`PartnerLocator`] and calls its three
//! operations.  Decoding wire formats into [`PartnerRecord`]/[`Point`] and
//! encoding results back out is the host's job.

use std::sync::Arc;

use pl_catalog::{Catalog, PartnerId, PartnerRecord};
use pl_geom::Point;

use crate::{LocateError, LocateResult, Locator, LocatorConfig};

/// Catalog plus query strategy.
///
/// Cheap to clone: clones share the same catalog.  `Send + Sync`, so one
/// instance can serve many concurrent requests.
///
/// # Example
///
/// ```
/// use pl_locator::{LocatorConfig, MultiPolygon, PartnerLocator, PartnerRecord, Point, Polygon, Ring};
///
/// let square = Ring::from_coords(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]).unwrap();
/// let area = MultiPolygon::from(Polygon::from_exterior(square));
///
/// let locator = PartnerLocator::new(LocatorConfig::default());
/// locator.upsert(PartnerRecord::new("a", area, Point::new(5.0, 5.0)).unwrap()).unwrap();
///
/// let found = locator.find_closest_containing(Point::new(4.0, 6.0)).unwrap();
/// assert_eq!(found.unwrap().id().as_str(), "a");
/// assert!(locator.find_closest_containing(Point::new(15.0, 5.0)).unwrap().is_none());
/// ```
#[derive(Clone)]
pub struct PartnerLocator {
    catalog: Arc<Catalog>,
    locator: Locator,
    config:  LocatorConfig,
}

impl PartnerLocator {
    /// Empty catalog, indexed if `config.spatial_index` is set.
    pub fn new(config: LocatorConfig) -> Self {
        let catalog = if config.spatial_index { Catalog::with_index() } else { Catalog::new() };
        Self::with_catalog(Arc::new(catalog), config)
    }

    /// Wrap an existing catalog.  `config.spatial_index` is ignored: the
    /// catalog already decided whether it is indexed.
    pub fn with_catalog(catalog: Arc<Catalog>, config: LocatorConfig) -> Self {
        Self { catalog, locator: Locator::new(&config), config }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// The query strategy built from [`config`](Self::config).
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    // ── Host operations ───────────────────────────────────────────────────

    /// Insert or replace the record with `record.id()`; returns what was stored.
    pub fn upsert(&self, record: PartnerRecord) -> LocateResult<Arc<PartnerRecord>> {
        Ok(self.catalog.upsert(record)?)
    }

    pub fn get_by_id(&self, id: &PartnerId) -> LocateResult<Arc<PartnerRecord>> {
        self.catalog.get(id).ok_or_else(|| LocateError::NotFound(id.clone()))
    }

    /// See [`Locator::find_closest_containing`].
    pub fn find_closest_containing(&self, query: Point) -> LocateResult<Option<Arc<PartnerRecord>>> {
        self.locator.find_closest_containing(&self.catalog, query)
    }
}

impl Default for PartnerLocator {
    fn default() -> Self {
        Self::new(LocatorConfig::default())
    }
}
