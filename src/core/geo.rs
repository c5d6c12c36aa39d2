use crate::core::constants::{MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::core::projection;
use geo::HaversineDistance;
use serde::{Deserialize, Serialize};

/// Represents a geographical coordinate with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a new coordinate. Values are not validated.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        (MIN_LATITUDE..=MAX_LATITUDE).contains(&self.lat)
            && (MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.lng)
    }

    /// Great-circle distance to another coordinate, in metres
    pub fn distance_to(&self, other: &GeoCoordinate) -> f64 {
        geo_types::Point::from(*self).haversine_distance(&geo_types::Point::from(*other))
    }

    /// Projects into global pixel space at full precision
    pub fn to_pixel(&self) -> PixelPoint {
        PixelPoint::new(
            projection::longitude_to_pixel_x(self.lng),
            projection::latitude_to_pixel_y(self.lat),
        )
    }
}

impl Default for GeoCoordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl From<GeoCoordinate> for geo_types::Point<f64> {
    fn from(coord: GeoCoordinate) -> Self {
        geo_types::Point::new(coord.lng, coord.lat)
    }
}

impl From<geo_types::Point<f64>> for GeoCoordinate {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// A point in the global Mercator pixel space. Y grows southward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - other.x, self.y - other.y)
    }

    /// Inverse-projects back to a geographic coordinate
    pub fn to_coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(
            projection::pixel_y_to_latitude(self.y),
            projection::pixel_x_to_longitude(self.x),
        )
    }
}

impl Default for PixelPoint {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Size of the caller's map view, in its own linear display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Visible geographic extent around a center, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl CoordinateSpan {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }

    /// A span with the same extent on both axes
    pub fn square(delta: f64) -> Self {
        Self::new(delta, delta)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude_delta.is_finite() && self.longitude_delta.is_finite()
    }
}

/// A center coordinate together with the span visible around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRegion {
    pub center: GeoCoordinate,
    pub span: CoordinateSpan,
}

impl CoordinateRegion {
    pub fn new(center: GeoCoordinate, span: CoordinateSpan) -> Self {
        Self { center, span }
    }

    /// South-west and north-east corners of the region
    pub fn bounds(&self) -> (GeoCoordinate, GeoCoordinate) {
        let half_lat = self.span.latitude_delta / 2.0;
        let half_lng = self.span.longitude_delta / 2.0;
        (
            GeoCoordinate::new(self.center.lat - half_lat, self.center.lng - half_lng),
            GeoCoordinate::new(self.center.lat + half_lat, self.center.lng + half_lng),
        )
    }

    /// Checks if the region contains a point (edges included)
    pub fn contains(&self, point: &GeoCoordinate) -> bool {
        let (south_west, north_east) = self.bounds();
        point.lat >= south_west.lat
            && point.lat <= north_east.lat
            && point.lng >= south_west.lng
            && point.lng <= north_east.lng
    }
}
