//! CSV batch queries.
//!
//! # CSV formats
//!
//! Input, one query coordinate per row:
//!
//! ```csv
//! lon,lat
//! -46.57421,-21.785741
//! -43.2,-22.9
//! ```
//!
//! Output, one row per input row in the same order.  `partner_id` and
//! `distance` are empty when no partner covers the coordinate; `distance` is
//! in the locator's metric (raw degrees for planar, metres for haversine).
//!
//! ```csv
//! lon,lat,partner_id,distance
//! -46.57421,-21.785741,1,1234.5
//! -43.2,-22.9,,
//! ```

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use pl_geom::Point;
use pl_locator::PartnerLocator;

use crate::LoadResult;

#[derive(Deserialize)]
struct QueryRow {
    lon: f64,
    lat: f64,
}

/// One output row of [`locate_batch`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchRow {
    pub lon:        f64,
    pub lat:        f64,
    pub partner_id: Option<String>,
    pub distance:   Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_queries_csv(path: &Path) -> LoadResult<Vec<Point>> {
    let file = std::fs::File::open(path)?;
    load_queries_reader(file)
}

/// Like [`load_queries_csv`] but accepts any `Read` source.
pub fn load_queries_reader<R: Read>(reader: R) -> LoadResult<Vec<Point>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut queries = Vec::new();
    for result in csv_reader.deserialize::<QueryRow>() {
        let row = result?;
        queries.push(Point::new(row.lon, row.lat));
    }
    Ok(queries)
}

/// Run every query against `locator` and write one [`MatchRow`] per query to
/// `writer`.  Returns the number of queries that matched a partner.
///
/// A non-finite query aborts the batch with `LocateError::InvalidInput`.
pub fn locate_batch<W: Write>(
    locator: &PartnerLocator,
    queries: &[Point],
    writer:  W,
) -> LoadResult<usize> {
    let metric = locator.locator().metric();
    let mut out = csv::Writer::from_writer(writer);
    let mut matched = 0;

    for &q in queries {
        let found = locator.find_closest_containing(q)?;
        if found.is_some() {
            matched += 1;
        }
        out.serialize(MatchRow {
            lon:        q.lon(),
            lat:        q.lat(),
            partner_id: found.as_ref().map(|r| r.id().to_string()),
            distance:   found.as_ref().map(|r| metric.distance(q, r.location())),
        })?;
    }
    out.flush()?;

    log::info!("{matched} of {} queries matched a partner", queries.len());
    Ok(matched)
}
