//! The partner catalog.
//!
//! # Data layout
//!
//! ```text
//! records:   PartnerId -> Arc<PartnerRecord>
//! documents: document  -> PartnerId          (non-empty documents only)
//! index:     Option<SpatialIndex>            (R-tree of coverage boxes)
//! ```
//!
//! All three live behind one `RwLock`, so the document map and the index can
//! never disagree with `records`.  Readers clone `Arc`s out of the lock and do
//! all geometry work after releasing it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pl_geom::Point;

use crate::{CatalogError, CatalogResult, PartnerId, PartnerRecord, SpatialIndex};

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

#[derive(Default)]
struct CatalogState {
    records:   Map<PartnerId, Arc<PartnerRecord>>,
    documents: Map<String, PartnerId>,
    index:     Option<SpatialIndex>,
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Mapping from identity to [`PartnerRecord`], safe to share between threads.
///
/// Create with [`Catalog::new`] for full-scan lookups or
/// [`Catalog::with_index`] to maintain a bounding-box R-tree alongside the
/// records.
#[derive(Default)]
pub struct Catalog {
    state: RwLock<CatalogState>,
}

impl Catalog {
    /// Catalog without a spatial index: [`candidates`](Self::candidates)
    /// returns every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog that keeps a [`SpatialIndex`] in step with every upsert.
    pub fn with_index() -> Self {
        Self {
            state: RwLock::new(CatalogState {
                index: Some(SpatialIndex::new()),
                ..CatalogState::default()
            }),
        }
    }

    // A panic cannot leave a half-written record behind (records are swapped
    // as whole `Arc`s), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Writes ────────────────────────────────────────────────────────────

    /// Insert `record`, or replace the record with the same identity.
    ///
    /// Returns the stored record.  Fails with
    /// [`CatalogError::DuplicateDocument`] if a *different* partner already
    /// holds the record's non-empty document; the catalog is then unchanged.
    pub fn upsert(&self, record: PartnerRecord) -> CatalogResult<Arc<PartnerRecord>> {
        let record = Arc::new(record);
        let id = record.id().clone();
        let document = record.profile().document.clone();

        let mut state = self.write();

        if !document.is_empty() {
            if let Some(holder) = state.documents.get(&document).filter(|h| **h != id) {
                return Err(CatalogError::DuplicateDocument { document, holder: holder.clone() });
            }
        }

        let previous = state.records.insert(id.clone(), Arc::clone(&record));

        if let Some(prev) = &previous {
            let old_doc = &prev.profile().document;
            if !old_doc.is_empty() && *old_doc != document {
                state.documents.remove(old_doc);
            }
        }
        if !document.is_empty() {
            state.documents.insert(document, id.clone());
        }

        let old_bbox = previous.as_ref().map(|p| p.bounding_box());
        if let Some(index) = state.index.as_mut() {
            index.replace(id, old_bbox, record.bounding_box());
        }

        Ok(record)
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    pub fn get(&self, id: &PartnerId) -> Option<Arc<PartnerRecord>> {
        self.read().records.get(id).cloned()
    }

    pub fn contains(&self, id: &PartnerId) -> bool {
        self.read().records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        self.read().index.is_some()
    }

    /// Snapshot of every record, in no particular order.
    ///
    /// Each call takes a fresh snapshot under the read lock; upserts made
    /// while the caller iterates are not reflected.
    pub fn all(&self) -> std::vec::IntoIter<Arc<PartnerRecord>> {
        let snapshot: Vec<Arc<PartnerRecord>> = self.read().records.values().cloned().collect();
        snapshot.into_iter()
    }

    /// Sorted snapshot of every identity.
    pub fn ids(&self) -> Vec<PartnerId> {
        let mut ids: Vec<PartnerId> = self.read().records.keys().cloned().collect();
        ids.sort_unstable();
        ids
    }

    /// Records that may cover `p`.
    ///
    /// With an index, only partners whose coverage box contains `p`; without
    /// one, every record.  Either way the caller must still run the exact
    /// containment test.
    pub fn candidates(&self, p: Point) -> Vec<Arc<PartnerRecord>> {
        let state = self.read();
        match &state.index {
            Some(index) => index
                .candidates(p)
                .filter_map(|id| state.records.get(id).cloned())
                .collect(),
            None => state.records.values().cloned().collect(),
        }
    }
}
