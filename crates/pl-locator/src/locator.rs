//! Containment filter and distance ranking.

use std::cmp::Ordering;
use std::sync::Arc;

use pl_catalog::{Catalog, PartnerRecord};
use pl_geom::{DistanceMetric, Point};

use crate::{LocateError, LocateResult, LocatorConfig};

/// Stateless query strategy: which metric to rank with and when to go
/// parallel.  The catalog it runs against is passed per call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Locator {
    metric:             DistanceMetric,
    parallel_threshold: usize,
}

impl Locator {
    pub fn new(config: &LocatorConfig) -> Self {
        Self {
            metric:             config.metric,
            parallel_threshold: config.parallel_threshold,
        }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// The partner whose coverage area contains `query` and whose location is
    /// closest to it, or `None` if no partner covers `query`.
    ///
    /// Exact distance ties go to the lexicographically smallest id.  Fails
    /// only if `query` is not finite.
    pub fn find_closest_containing(
        &self,
        catalog: &Catalog,
        query:   Point,
    ) -> LocateResult<Option<Arc<PartnerRecord>>> {
        if !query.is_finite() {
            return Err(LocateError::InvalidInput { lon: query.lon(), lat: query.lat() });
        }
        let candidates = catalog.candidates(query);
        Ok(self.rank(query, candidates))
    }

    fn rank(&self, query: Point, candidates: Vec<Arc<PartnerRecord>>) -> Option<Arc<PartnerRecord>> {
        #[cfg(feature = "parallel")]
        if candidates.len() > self.parallel_threshold {
            use rayon::prelude::*;

            let metric = self.metric;
            return candidates
                .into_par_iter()
                .filter(|r| r.covers(query))
                .map(|r| (metric.distance(query, r.location()), r))
                .min_by(closer)
                .map(|(_, r)| r);
        }

        select_closest(self.metric, query, candidates)
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(&LocatorConfig::default())
    }
}

/// Sequential filter-and-rank over an arbitrary candidate sequence.
///
/// Candidates that do not cover `query` are dropped; the rest are ranked by
/// `(distance, id)`.
pub fn select_closest<I>(metric: DistanceMetric, query: Point, candidates: I) -> Option<Arc<PartnerRecord>>
where
    I: IntoIterator<Item = Arc<PartnerRecord>>,
{
    candidates
        .into_iter()
        .filter(|r| r.covers(query))
        .map(|r| (metric.distance(query, r.location()), r))
        .min_by(closer)
        .map(|(_, r)| r)
}

/// Total order on `(distance, record)`: nearer first, then smaller id.  Ids
/// are unique, so no two distinct candidates compare equal and the winner
/// does not depend on iteration order.
fn closer(a: &(f64, Arc<PartnerRecord>), b: &(f64, Arc<PartnerRecord>)) -> Ordering {
    a.0.total_cmp(&b.0).then_with(|| a.1.id().cmp(b.1.id()))
}
