//! Unit tests for pl-locator.

#[cfg(test)]
mod helpers {
    use pl_catalog::PartnerRecord;
    use pl_geom::{MultiPolygon, Point, Polygon, Ring};

    use crate::{LocatorConfig, PartnerLocator};

    /// Rectangle `[x0, x1] x [y0, y1]` as a single-polygon area.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon {
        let ring = Ring::from_coords(&[(x0, y0), (x0, y1), (x1, y1), (x1, y0), (x0, y0)]).unwrap();
        MultiPolygon::from(Polygon::from_exterior(ring))
    }

    pub fn partner(id: &str, area: MultiPolygon, lon: f64, lat: f64) -> PartnerRecord {
        PartnerRecord::new(id, area, Point::new(lon, lat)).unwrap()
    }

    /// Partner A: square (0,0)-(10,10) located at (5,5).
    /// Partner B: square (20,0)-(30,10) located at (25,5).
    pub fn two_squares(config: LocatorConfig) -> PartnerLocator {
        let loc = PartnerLocator::new(config);
        loc.upsert(partner("A", rect(0.0, 0.0, 10.0, 10.0), 5.0, 5.0)).unwrap();
        loc.upsert(partner("B", rect(20.0, 0.0, 30.0, 10.0), 25.0, 5.0)).unwrap();
        loc
    }

    /// Both index settings, so every scenario runs with and without the
    /// R-tree pre-filter.
    pub fn configs() -> [LocatorConfig; 2] {
        [
            LocatorConfig { spatial_index: true, ..LocatorConfig::default() },
            LocatorConfig { spatial_index: false, ..LocatorConfig::default() },
        ]
    }

    pub fn found_id(loc: &PartnerLocator, lon: f64, lat: f64) -> Option<String> {
        loc.find_closest_containing(Point::new(lon, lat))
            .unwrap()
            .map(|r| r.id().to_string())
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use pl_geom::DistanceMetric;

    use super::helpers::{configs, found_id, partner, rect, two_squares};
    use crate::{LocatorConfig, PartnerLocator};

    #[test]
    fn two_disjoint_squares() {
        for config in configs() {
            let loc = two_squares(config);
            assert_eq!(found_id(&loc, 5.0, 5.0).as_deref(), Some("A"));
            assert_eq!(found_id(&loc, 25.0, 6.0).as_deref(), Some("B"));
            assert_eq!(found_id(&loc, 15.0, 5.0), None);
        }
    }

    #[test]
    fn overlapping_areas_nearest_location_wins() {
        for config in configs() {
            for order in [["near", "far"], ["far", "near"]] {
                let loc = PartnerLocator::new(config.clone());
                for id in order {
                    let rec = match id {
                        "near" => partner("near", rect(0.0, 0.0, 10.0, 10.0), 6.0, 5.0),
                        _ => partner("far", rect(-10.0, -10.0, 20.0, 20.0), 15.0, 15.0),
                    };
                    loc.upsert(rec).unwrap();
                }
                assert_eq!(found_id(&loc, 5.0, 5.0).as_deref(), Some("near"));
            }
        }
    }

    #[test]
    fn nearer_location_outside_coverage_is_ignored() {
        for config in configs() {
            let loc = PartnerLocator::new(config);
            // "close" sits right next to the query but does not cover it.
            loc.upsert(partner("close", rect(6.0, 0.0, 8.0, 10.0), 5.1, 5.0)).unwrap();
            loc.upsert(partner("cover", rect(0.0, 0.0, 5.5, 10.0), 0.5, 0.5)).unwrap();
            assert_eq!(found_id(&loc, 5.0, 5.0).as_deref(), Some("cover"));
        }
    }

    #[test]
    fn query_on_coverage_edge_matches_nothing() {
        for config in configs() {
            let loc = two_squares(config);
            assert_eq!(found_id(&loc, 10.0, 5.0), None);
            assert_eq!(found_id(&loc, 20.0, 0.0), None);
        }
    }

    #[test]
    fn default_ranking_uses_raw_degrees() {
        for config in configs() {
            let loc = PartnerLocator::new(config);
            // One degree east is nearer on the ground at 60°N, but 0.8 degrees
            // north is nearer in raw coordinates.
            loc.upsert(partner("east", rect(-2.0, 58.0, 2.0, 62.0), 1.0, 60.0)).unwrap();
            loc.upsert(partner("north", rect(-2.0, 58.0, 2.0, 62.0), 0.0, 60.8)).unwrap();
            assert_eq!(found_id(&loc, 0.0, 60.0).as_deref(), Some("north"));
        }
    }

    #[test]
    fn haversine_ranks_by_ground_distance() {
        let loc = PartnerLocator::new(LocatorConfig {
            metric: DistanceMetric::Haversine,
            ..LocatorConfig::default()
        });
        loc.upsert(partner("east", rect(-2.0, 58.0, 2.0, 62.0), 1.0, 60.0)).unwrap();
        loc.upsert(partner("north", rect(-2.0, 58.0, 2.0, 62.0), 0.0, 60.8)).unwrap();
        assert_eq!(found_id(&loc, 0.0, 60.0).as_deref(), Some("east"));
    }

    #[test]
    fn upsert_moves_partner() {
        for config in configs() {
            let loc = two_squares(config);
            loc.upsert(partner("A", rect(40.0, 0.0, 50.0, 10.0), 45.0, 5.0)).unwrap();
            assert_eq!(found_id(&loc, 5.0, 5.0), None);
            assert_eq!(found_id(&loc, 45.0, 5.0).as_deref(), Some("A"));
            assert_eq!(loc.len(), 2);
        }
    }
}

// ── Tie-break & minimality ────────────────────────────────────────────────────

#[cfg(test)]
mod ranking {
    use std::sync::Arc;

    use pl_geom::{DistanceMetric, Point};

    use super::helpers::{configs, found_id, partner, rect};
    use crate::{LocatorConfig, PartnerLocator, select_closest};

    #[test]
    fn equal_distance_prefers_smallest_id() {
        for config in configs() {
            let loc = PartnerLocator::new(config);
            // Mirror-image locations: exactly equal distance from (5, 5).
            loc.upsert(partner("zeta", rect(0.0, 0.0, 10.0, 10.0), 7.0, 5.0)).unwrap();
            loc.upsert(partner("alpha", rect(0.0, 0.0, 10.0, 10.0), 3.0, 5.0)).unwrap();
            loc.upsert(partner("mid", rect(0.0, 0.0, 10.0, 10.0), 5.0, 9.0)).unwrap();
            assert_eq!(found_id(&loc, 5.0, 5.0).as_deref(), Some("alpha"));
        }
    }

    #[test]
    fn tie_break_is_independent_of_candidate_order() {
        let a = Arc::new(partner("a", rect(0.0, 0.0, 10.0, 10.0), 4.0, 5.0));
        let b = Arc::new(partner("b", rect(0.0, 0.0, 10.0, 10.0), 6.0, 5.0));
        let q = Point::new(5.0, 5.0);
        for metric in [DistanceMetric::Haversine, DistanceMetric::Planar] {
            let fwd = select_closest(metric, q, [Arc::clone(&a), Arc::clone(&b)]).unwrap();
            let rev = select_closest(metric, q, [Arc::clone(&b), Arc::clone(&a)]).unwrap();
            assert_eq!(fwd.id().as_str(), "a");
            assert_eq!(rev.id().as_str(), "a");
        }
    }

    /// Nested squares around the origin, each located on a different spot.
    /// The result must cover the query and be no farther than any other
    /// covering partner.
    #[test]
    fn result_is_covering_and_minimal() {
        for metric in [DistanceMetric::Haversine, DistanceMetric::Planar] {
            let loc = PartnerLocator::new(LocatorConfig { metric, ..LocatorConfig::default() });
            for i in 1..=12 {
                let half = i as f64;
                let lon = (i as f64 * 0.7).sin() * half;
                let lat = (i as f64 * 1.3).cos() * half;
                loc.upsert(partner(&format!("p{i:02}"), rect(-half, -half, half, half), lon, lat))
                    .unwrap();
            }

            for qx in -6..=6 {
                for qy in -6..=6 {
                    let q = Point::new(qx as f64 + 0.25, qy as f64 + 0.25);
                    let found = loc.find_closest_containing(q).unwrap();
                    let covering: Vec<_> = loc.catalog().all().filter(|r| r.covers(q)).collect();
                    match found {
                        None => assert!(covering.is_empty(), "{q} is covered"),
                        Some(best) => {
                            assert!(best.covers(q));
                            let d = metric.distance(q, best.location());
                            for other in &covering {
                                assert!(d <= metric.distance(q, other.location()), "{q}");
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn indexed_and_full_scan_agree() {
        let [indexed, scan] = super::helpers::configs().map(PartnerLocator::new);
        for i in 0..40 {
            let x0 = (i % 8) as f64 * 7.0;
            let y0 = (i / 8) as f64 * 7.0;
            let rec = partner(&format!("p{i}"), rect(x0, y0, x0 + 12.0, y0 + 12.0), x0 + 3.0, y0 + 9.0);
            indexed.upsert(rec.clone()).unwrap();
            scan.upsert(rec).unwrap();
        }
        for qx in 0..60 {
            for qy in 0..40 {
                let (lon, lat) = (qx as f64 + 0.5, qy as f64 + 0.5);
                assert_eq!(found_id(&indexed, lon, lat), found_id(&scan, lon, lat));
            }
        }
    }
}

// ── Host operations & errors ──────────────────────────────────────────────────

#[cfg(test)]
mod service {
    use pl_catalog::{CatalogError, PartnerId, PartnerProfile};
    use pl_geom::{DistanceMetric, Point};

    use super::helpers::{configs, partner, rect, two_squares};
    use crate::{LocateError, LocatorConfig, PartnerLocator};

    #[test]
    fn empty_catalog_returns_none() {
        for config in configs() {
            let loc = PartnerLocator::new(config);
            assert!(loc.is_empty());
            for (lon, lat) in [(0.0, 0.0), (-49.2774992, -25.42731), (180.0, 90.0)] {
                assert!(loc.find_closest_containing(Point::new(lon, lat)).unwrap().is_none());
            }
        }
    }

    #[test]
    fn non_finite_query_is_invalid_input() {
        let loc = two_squares(LocatorConfig::default());
        let err = loc.find_closest_containing(Point::new(f64::NAN, 5.0)).unwrap_err();
        assert!(matches!(err, LocateError::InvalidInput { .. }));
        assert!(loc.find_closest_containing(Point::new(5.0, f64::INFINITY)).is_err());

        let empty = PartnerLocator::default();
        assert!(empty.find_closest_containing(Point::new(f64::NEG_INFINITY, 0.0)).is_err());
    }

    #[test]
    fn upsert_then_get_by_id() {
        let loc = PartnerLocator::default();
        let rec = partner("A", rect(0.0, 0.0, 10.0, 10.0), 5.0, 5.0).with_profile(PartnerProfile {
            trading_name: "Adega da Cerveja - Pinheiros".into(),
            owner_name:   "Zé da Silva".into(),
            document:     "1432132123891/0001".into(),
        });
        let stored = loc.upsert(rec.clone()).unwrap();
        assert_eq!(*stored, rec);
        assert_eq!(*loc.get_by_id(&PartnerId::from("A")).unwrap(), rec);
    }

    #[test]
    fn get_by_id_not_found() {
        let loc = two_squares(LocatorConfig::default());
        assert_eq!(
            loc.get_by_id(&PartnerId::from("missing")).unwrap_err(),
            LocateError::NotFound(PartnerId::from("missing"))
        );
    }

    #[test]
    fn duplicate_document_surfaces_as_catalog_error() {
        let loc = PartnerLocator::default();
        let profile = PartnerProfile { document: "doc".into(), ..PartnerProfile::default() };
        loc.upsert(partner("A", rect(0.0, 0.0, 1.0, 1.0), 0.5, 0.5).with_profile(profile.clone()))
            .unwrap();
        let err = loc
            .upsert(partner("B", rect(0.0, 0.0, 1.0, 1.0), 0.5, 0.5).with_profile(profile))
            .unwrap_err();
        assert!(matches!(err, LocateError::Catalog(CatalogError::DuplicateDocument { .. })));
    }

    #[test]
    fn locator_follows_config() {
        let config = LocatorConfig {
            metric:             DistanceMetric::Haversine,
            spatial_index:      false,
            parallel_threshold: 16,
        };
        let loc = PartnerLocator::new(config);
        assert_eq!(loc.locator().metric(), DistanceMetric::Haversine);
        assert_eq!(loc.locator().parallel_threshold(), 16);
        assert!(!loc.catalog().is_indexed());

        let defaults = PartnerLocator::default();
        assert_eq!(defaults.locator().metric(), DistanceMetric::Planar);
        assert_eq!(defaults.locator().parallel_threshold(), 1_024);
        assert!(defaults.catalog().is_indexed());
    }

    #[test]
    fn clones_share_catalog() {
        let loc = PartnerLocator::default();
        let other = loc.clone();
        other.upsert(partner("A", rect(0.0, 0.0, 10.0, 10.0), 5.0, 5.0)).unwrap();
        assert_eq!(loc.len(), 1);
    }

    #[test]
    fn concurrent_queries() {
        let loc = two_squares(LocatorConfig::default());
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let a = loc.find_closest_containing(Point::new(5.0, 5.0)).unwrap();
                        assert_eq!(a.unwrap().id().as_str(), "A");
                    }
                });
            }
        });
    }
}

// ── Parallel ranking ──────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel {
    use pl_geom::Point;

    use super::helpers::{partner, rect};
    use crate::{LocatorConfig, PartnerLocator};

    #[test]
    fn parallel_matches_sequential() {
        let base = LocatorConfig { spatial_index: false, ..LocatorConfig::default() };
        let par = PartnerLocator::new(LocatorConfig { parallel_threshold: 0, ..base.clone() });
        let seq = PartnerLocator::new(LocatorConfig { parallel_threshold: usize::MAX, ..base });
        for i in 0..500 {
            let lon = (i % 25) as f64 * 0.5;
            let lat = (i / 25) as f64 * 0.5;
            let rec = partner(&format!("p{i:03}"), rect(-1.0, -1.0, 20.0, 20.0), lon, lat);
            par.upsert(rec.clone()).unwrap();
            seq.upsert(rec).unwrap();
        }
        for q in [Point::new(3.1, 4.2), Point::new(0.25, 0.25), Point::new(12.0, 9.9)] {
            let a = par.find_closest_containing(q).unwrap().map(|r| r.id().clone());
            let b = seq.find_closest_containing(q).unwrap().map(|r| r.id().clone());
            assert_eq!(a, b);
        }
    }
}
