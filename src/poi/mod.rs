//! Point-of-interest handling on top of the projection core: distance
//! ranking of search results, AR label layout, map annotations and the
//! search-area bookkeeping that decides when to query again.

pub mod labels;
pub mod ranking;
pub mod search;

// Re-exports for convenience
pub use labels::{annotations, layout_labels, shows_titles, Annotation, PoiLabel};
pub use ranking::{rank_by_distance, PointOfInterest, RankedPoi};
pub use search::{initial_region, should_refresh, SearchRequest};
