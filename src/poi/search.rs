use crate::core::config::SearchConfig;
use crate::core::geo::{CoordinateRegion, CoordinateSpan, GeoCoordinate, ViewportSize};
use crate::core::projection::GeoProjection;
use serde::{Deserialize, Serialize};

/// A place search restricted to points of interest near a region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub region: CoordinateRegion,
}

impl SearchRequest {
    /// Search hint region: a square of `span_degrees` centered on `center`
    pub fn around(query: impl Into<String>, center: GeoCoordinate, config: &SearchConfig) -> Self {
        Self {
            query: query.into(),
            region: CoordinateRegion::new(center, CoordinateSpan::square(config.span_degrees)),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }
}

/// Whether the results need fetching again after the visible region moved:
/// either nothing was found yet or the search anchor scrolled out of view.
pub fn should_refresh(visible: &CoordinateRegion, anchor: &GeoCoordinate, poi_count: usize) -> bool {
    let refresh = poi_count == 0 || !visible.contains(anchor);
    if refresh {
        log::debug!(
            "refreshing results (count {}, anchor ({:.5}, {:.5}))",
            poi_count,
            anchor.lat,
            anchor.lng
        );
    }
    refresh
}

/// Region the map snaps to when it first locks onto the user
pub fn initial_region(
    projection: &GeoProjection,
    center: &GeoCoordinate,
    viewport: &ViewportSize,
    config: &SearchConfig,
) -> CoordinateRegion {
    projection.region_for_zoom(center, viewport, config.initial_zoom)
}
