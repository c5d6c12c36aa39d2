//! # poiview
//!
//! Geo-projection and point-of-interest layout helpers for viewers that
//! overlay nearby places on an AR camera feed and a companion map.
//!
//! The core is a Mercator pixel-space projection with conversions between
//! coordinates, zoom levels and visible spans. On top of it sit the pure
//! parts of a POI viewer: distance ranking, label layout, annotation
//! visibility and search-area bookkeeping. Rendering, camera and location
//! services are left to the host platform.

pub mod core;
pub mod poi;
pub mod prelude;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{Config, ConfigProfile, DomainPolicy, LabelConfig, Precision, ProjectionConfig, SearchConfig},
    geo::{CoordinateRegion, CoordinateSpan, GeoCoordinate, PixelPoint, ViewportSize},
    projection::GeoProjection,
};

pub use crate::poi::{Annotation, PoiLabel, PointOfInterest, RankedPoi, SearchRequest};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinate: ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Invalid viewport width: {0}")]
    InvalidViewportWidth(f64),

    #[error("Invalid span: longitude delta {0}")]
    InvalidSpan(f64),

    #[error("Non-finite result: {0}")]
    NonFinite(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`.
/// Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
