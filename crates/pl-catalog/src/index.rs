//! Bounding-box spatial index.
//!
//! An R-tree (via `rstar`) maps each partner's coverage bounding box to its
//! `PartnerId`.  A point query returns every partner whose box contains the
//! point.  This is a conservative pre-filter: it may return partners whose
//! polygon does not contain the point, but never omits one that does, because
//! every polygon lies inside its own box and box containment is inclusive.

use rstar::{AABB, RTree, RTreeObject};

use pl_geom::{BoundingBox, Point};

use crate::PartnerId;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a `[lon, lat]` envelope and its partner.
#[derive(Clone, Debug, PartialEq)]
struct PartnerEnvelope {
    envelope: AABB<[f64; 2]>,
    id:       PartnerId,
}

impl PartnerEnvelope {
    fn new(id: PartnerId, bbox: BoundingBox) -> Self {
        Self {
            envelope: AABB::from_corners(bbox.min.into(), bbox.max.into()),
            id,
        }
    }
}

impl RTreeObject for PartnerEnvelope {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── SpatialIndex ──────────────────────────────────────────────────────────────

/// R-tree of partner coverage boxes.
///
/// The index stores only ids; the [`Catalog`](crate::Catalog) keeps it in
/// step with its records under the same lock.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<PartnerEnvelope>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load from `(id, box)` pairs.  O(N log N), faster than N inserts.
    pub fn bulk_load<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PartnerId, BoundingBox)>,
    {
        let entries = entries
            .into_iter()
            .map(|(id, bbox)| PartnerEnvelope::new(id, bbox))
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn insert(&mut self, id: PartnerId, bbox: BoundingBox) {
        self.tree.insert(PartnerEnvelope::new(id, bbox));
    }

    /// Remove the entry previously inserted for `(id, bbox)`.  Returns `false`
    /// if no such entry exists.
    pub fn remove(&mut self, id: &PartnerId, bbox: BoundingBox) -> bool {
        self.tree.remove(&PartnerEnvelope::new(id.clone(), bbox)).is_some()
    }

    /// Replace `id`'s box: remove `old` (if any) and insert `new`.
    pub fn replace(&mut self, id: PartnerId, old: Option<BoundingBox>, new: BoundingBox) {
        if let Some(old) = old {
            self.remove(&id, old);
        }
        self.insert(id, new);
    }

    /// Ids of every partner whose box contains `p` (boundary included).
    /// Order is unspecified.
    pub fn candidates(&self, p: Point) -> impl Iterator<Item = &PartnerId> + '_ {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point(p.into()))
            .map(|e| &e.id)
    }
}
