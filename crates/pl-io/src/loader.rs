//! Partner file loader.
//!
//! # File format
//!
//! Either a bare JSON array of [`PartnerDocument`]s or an object wrapping the
//! array under `"pdvs"`:
//!
//! ```json
//! { "pdvs": [ { "id": "1", "coverageArea": { ... }, "address": { ... } } ] }
//! ```
//!
//! The whole file is parsed before any record is built; the first invalid
//! document aborts the load with its zero-based index.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use pl_catalog::PartnerRecord;
use pl_locator::PartnerLocator;

use crate::{LoadError, LoadResult, PartnerDocument};

#[derive(Deserialize)]
#[serde(untagged)]
enum PartnerFile {
    List(Vec<PartnerDocument>),
    Wrapped { pdvs: Vec<PartnerDocument> },
}

impl PartnerFile {
    fn into_documents(self) -> Vec<PartnerDocument> {
        match self {
            PartnerFile::List(docs) | PartnerFile::Wrapped { pdvs: docs } => docs,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate every partner document in the JSON file at `path`.
pub fn load_partners_json(path: &Path) -> LoadResult<Vec<PartnerRecord>> {
    let file = File::open(path)?;
    let records = load_partners_reader(BufReader::new(file))?;
    log::info!("loaded {} partner documents from {}", records.len(), path.display());
    Ok(records)
}

/// Like [`load_partners_json`] but accepts any `Read` source.
pub fn load_partners_reader<R: Read>(reader: R) -> LoadResult<Vec<PartnerRecord>> {
    let file: PartnerFile = serde_json::from_reader(reader)?;
    file.into_documents()
        .into_iter()
        .enumerate()
        .map(|(index, doc)| {
            log::debug!("decoding partner document {index} (id {:?})", doc.id);
            PartnerRecord::try_from(doc).map_err(|source| LoadError::Document { index, source })
        })
        .collect()
}

/// Upsert every record into `locator`, in order.  Returns the number of
/// records upserted.
///
/// This is how a host rebuilds its in-memory catalog at startup.  A later
/// record with the same id replaces an earlier one.
pub fn populate<I>(locator: &PartnerLocator, records: I) -> LoadResult<usize>
where
    I: IntoIterator<Item = PartnerRecord>,
{
    let mut count = 0;
    for record in records {
        locator.upsert(record)?;
        count += 1;
    }
    log::info!("catalog holds {} partners after upserting {count} records", locator.len());
    Ok(count)
}
