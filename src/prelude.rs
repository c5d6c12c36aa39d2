//! Prelude module for common poiview types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use poiview::prelude::*;`

pub use crate::core::{
    config::{Config, ConfigProfile, DomainPolicy, LabelConfig, Precision, ProjectionConfig, SearchConfig},
    constants::{MAX_ZOOM_LEVEL, MERCATOR_OFFSET, MERCATOR_RADIUS},
    geo::{CoordinateRegion, CoordinateSpan, GeoCoordinate, PixelPoint, ViewportSize},
    projection::{
        latitude_to_pixel_y, longitude_to_pixel_x, pixel_x_to_longitude, pixel_y_to_latitude,
        span_for_zoom, zoom_for_span, GeoProjection,
    },
};

pub use crate::poi::{
    annotations, initial_region, layout_labels, rank_by_distance, should_refresh, shows_titles,
    Annotation, PoiLabel, PointOfInterest, RankedPoi, SearchRequest,
};

pub use crate::{Error, Result};
