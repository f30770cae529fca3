//! GeoJSON partner documents.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "id": "1",
//!   "tradingName": "Adega da Cerveja - Pinheiros",
//!   "ownerName": "Zé da Silva",
//!   "document": "1432132123891/0001",
//!   "coverageArea": {
//!     "type": "MultiPolygon",
//!     "coordinates": [[[[30, 20], [45, 40], [10, 40], [30, 20]]]]
//!   },
//!   "address": { "type": "Point", "coordinates": [-46.57421, -21.785741] }
//! }
//! ```
//!
//! Positions are `[longitude, latitude]`; a third (altitude) element is
//! accepted and ignored.  `tradingName`, `ownerName` and `document` may be
//! omitted.

use serde::{Deserialize, Serialize};

use pl_catalog::{PartnerProfile, PartnerRecord};
use pl_geom::{GeomError, MultiPolygon, Point, Polygon, Ring};

use crate::DocumentError;

/// A GeoJSON position: `[lon, lat]` or `[lon, lat, alt]`.
pub type Position = Vec<f64>;

type MultiPolygonCoords = Vec<Vec<Vec<Position>>>;

/// A GeoJSON geometry object with its `type` tag kept as a string so that a
/// mismatch can be reported precisely.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeoJsonGeometry<C> {
    #[serde(rename = "type")]
    pub kind:        String,
    pub coordinates: C,
}

/// Wire shape of one partner.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerDocument {
    pub id:            String,
    #[serde(default)]
    pub trading_name:  String,
    #[serde(default)]
    pub owner_name:    String,
    #[serde(default)]
    pub document:      String,
    pub coverage_area: GeoJsonGeometry<MultiPolygonCoords>,
    pub address:       GeoJsonGeometry<Position>,
}

// ── Decoding ──────────────────────────────────────────────────────────────────

impl TryFrom<PartnerDocument> for PartnerRecord {
    type Error = DocumentError;

    fn try_from(doc: PartnerDocument) -> Result<Self, DocumentError> {
        if doc.id.trim().is_empty() {
            return Err(DocumentError::EmptyId);
        }
        expect_type("coverageArea", "MultiPolygon", &doc.coverage_area.kind)?;
        expect_type("address", "Point", &doc.address.kind)?;

        let coverage_area = decode_multi_polygon(&doc.coverage_area.coordinates)?;
        let location = decode_position("address", &doc.address.coordinates)?;

        let record = PartnerRecord::new(doc.id, coverage_area, location)?.with_profile(PartnerProfile {
            trading_name: doc.trading_name,
            owner_name:   doc.owner_name,
            document:     doc.document,
        });
        Ok(record)
    }
}

fn expect_type(field: &'static str, expected: &'static str, found: &str) -> Result<(), DocumentError> {
    if found == expected {
        Ok(())
    } else {
        Err(DocumentError::WrongType { field, expected, found: found.to_owned() })
    }
}

fn decode_position(field: &'static str, pos: &[f64]) -> Result<Point, DocumentError> {
    match pos {
        [lon, lat, ..] => Ok(Point::new(*lon, *lat)),
        _ => Err(DocumentError::ShortPosition { field, len: pos.len() }),
    }
}

fn decode_ring(ring: &[Position]) -> Result<Ring, DocumentError> {
    let points = ring
        .iter()
        .map(|pos| decode_position("coverageArea", pos))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Ring::new(points)?)
}

/// GeoJSON polygon: exterior ring first, then holes.
fn decode_polygon(rings: &[Vec<Position>]) -> Result<Polygon, DocumentError> {
    let (exterior, holes) = rings
        .split_first()
        .ok_or(DocumentError::Geometry(GeomError::TooFewPoints { got: 0 }))?;
    let holes = holes
        .iter()
        .map(|h| decode_ring(h))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(decode_ring(exterior)?, holes))
}

fn decode_multi_polygon(coords: &MultiPolygonCoords) -> Result<MultiPolygon, DocumentError> {
    let polygons = coords
        .iter()
        .map(|rings| decode_polygon(rings))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MultiPolygon::new(polygons)?)
}

// ── Encoding ──────────────────────────────────────────────────────────────────

impl From<&PartnerRecord> for PartnerDocument {
    fn from(record: &PartnerRecord) -> Self {
        let encode_ring = |ring: &Ring| -> Vec<Position> {
            ring.points().iter().map(|p| vec![p.lon(), p.lat()]).collect()
        };
        let coordinates: MultiPolygonCoords = record
            .coverage_area()
            .polygons()
            .iter()
            .map(|poly| {
                std::iter::once(poly.exterior())
                    .chain(poly.holes())
                    .map(encode_ring)
                    .collect::<Vec<_>>()
            })
            .collect();

        let profile = record.profile();
        let location = record.location();
        Self {
            id:            record.id().to_string(),
            trading_name:  profile.trading_name.clone(),
            owner_name:    profile.owner_name.clone(),
            document:      profile.document.clone(),
            coverage_area: GeoJsonGeometry { kind: "MultiPolygon".into(), coordinates },
            address:       GeoJsonGeometry {
                kind:        "Point".into(),
                coordinates: vec![location.lon(), location.lat()],
            },
        }
    }
}
