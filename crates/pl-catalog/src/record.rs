//! Partner records.

use pl_geom::{BoundingBox, MultiPolygon, Point};

use crate::{CatalogError, CatalogResult, PartnerId};

// ── PartnerProfile ────────────────────────────────────────────────────────────

/// Descriptive fields carried alongside the geometry.  None of them take part
/// in locating; `document` is unique across the catalog when non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartnerProfile {
    pub trading_name: String,
    pub owner_name:   String,
    /// Legal registration number (e.g. a CNPJ).
    pub document:     String,
}

// ── PartnerRecord ─────────────────────────────────────────────────────────────

/// A partner's identity, coverage area and reference location.
///
/// Records are immutable once built.  Changing a partner's geometry means
/// building a new record with the same id and upserting it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PartnerRecord {
    id:            PartnerId,
    profile:       PartnerProfile,
    coverage_area: MultiPolygon,
    location:      Point,
}

impl PartnerRecord {
    /// Fails with [`CatalogError::InvalidLocation`] if `location` is not
    /// finite.  The coverage area was validated when it was constructed.
    pub fn new(
        id:            impl Into<PartnerId>,
        coverage_area: MultiPolygon,
        location:      Point,
    ) -> CatalogResult<Self> {
        let id = id.into();
        if let Err(source) = location.ensure_finite() {
            return Err(CatalogError::InvalidLocation { id, source });
        }
        Ok(Self { id, profile: PartnerProfile::default(), coverage_area, location })
    }

    pub fn with_profile(mut self, profile: PartnerProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn id(&self) -> &PartnerId {
        &self.id
    }

    pub fn profile(&self) -> &PartnerProfile {
        &self.profile
    }

    pub fn coverage_area(&self) -> &MultiPolygon {
        &self.coverage_area
    }

    pub fn location(&self) -> Point {
        self.location
    }

    /// Box of the coverage area; used as the spatial-index key.
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        self.coverage_area.bounding_box()
    }

    #[inline]
    pub fn covers(&self, p: Point) -> bool {
        self.coverage_area.contains(p)
    }
}
