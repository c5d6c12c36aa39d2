//! Projection constants and app-wide magic numbers.
//! Keeping them in a single place makes it easier to tweak them together.

/// Half the side length of the global pixel space (2^28).
pub const MERCATOR_OFFSET: f64 = 268_435_456.0;

/// Effective sphere radius of the projection, in pixels (OFFSET / π).
pub const MERCATOR_RADIUS: f64 = 85_445_659.447_053_95;

/// Zoom level at which one pixel-space unit maps to one screen point.
pub const MAX_ZOOM_LEVEL: f64 = 19.0;

/// Requested zoom levels above this are clamped before building a span.
pub const MAX_REQUESTED_ZOOM: i32 = 28;

/// `2^(ZOOM_SCALE_EXPONENT - zoom)` pixel-space units per viewport unit.
pub const ZOOM_SCALE_EXPONENT: i32 = 20;

/// Device pixels per viewport unit assumed when deriving a zoom level.
pub const SCREEN_SCALE: f64 = 2.0;

/// Zoom the map starts at when it first locks onto the user.
pub const INITIAL_ZOOM: i32 = 10;

/// Annotation titles are only shown above this zoom.
pub const DETAIL_ZOOM_THRESHOLD: f64 = 10.0;

/// Side of the square search region around the user, in degrees.
pub const SEARCH_SPAN_DEGREES: f64 = 0.01;

/// Label font size bounds (points).
pub const MIN_LABEL_FONT: f64 = 8.0;
pub const MAX_LABEL_FONT: f64 = 30.0;

/// Vertical spacing between stacked AR labels, in metres.
pub const LABEL_ALTITUDE_STEP_M: f64 = 100.0;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;
