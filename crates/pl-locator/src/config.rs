//! Locator configuration.

use pl_geom::DistanceMetric;

/// Tuning knobs for a [`PartnerLocator`](crate::PartnerLocator).
///
/// Typically loaded from a TOML file by the host application.  Every field
/// has a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocatorConfig {
    /// Distance model used to rank covering partners.  Applied uniformly to
    /// every comparison.  Default: planar distance on raw degrees.
    pub metric: DistanceMetric,

    /// Maintain a bounding-box R-tree so queries test only partners whose box
    /// contains the point.  Default: `true`.
    pub spatial_index: bool,

    /// Candidate count above which the filter and ranking run on Rayon.
    /// Ignored unless built with the `parallel` feature.  Default: 1024.
    pub parallel_threshold: usize,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            metric:             DistanceMetric::Planar,
            spatial_index:      true,
            parallel_threshold: 1_024,
        }
    }
}
