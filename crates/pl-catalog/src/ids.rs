//! Partner identity.
//!
//! Identities are opaque tokens chosen by the host (UUIDs in practice).  They
//! order lexicographically by their string value, which is the tie-break used
//! when two partners are equally close to a query.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Opaque, immutable partner identity.
///
/// Backed by `Arc<str>`, so cloning an id (done once per stored record and
/// once per index entry) never copies the string.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PartnerId(Arc<str>);

impl PartnerId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PartnerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PartnerId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl Borrow<str> for PartnerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PartnerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
