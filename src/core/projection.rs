//! Mercator pixel-space projection and zoom-level conversions.
//!
//! The global pixel space is a square of side `2 * MERCATOR_OFFSET` with the
//! origin meridian at `x = MERCATOR_OFFSET` and the equator at
//! `y = MERCATOR_OFFSET`. Y grows southward. Forward projections round to the
//! nearest whole pixel, so conversions round-trip up to one pixel of
//! quantization. Inverse projections are exact; only the legacy precision
//! rounds their input as well.
//!
//! The free functions always use full `f64` precision and never validate.
//! [`GeoProjection`] wraps them with a [`ProjectionConfig`] that selects the
//! latitude precision and what the `try_*` methods do with degenerate input.

use crate::core::config::{DomainPolicy, Precision, ProjectionConfig};
use crate::core::constants::{MAX_ZOOM_LEVEL, MERCATOR_OFFSET, MERCATOR_RADIUS, ZOOM_SCALE_EXPONENT};
use crate::core::geo::{CoordinateRegion, CoordinateSpan, GeoCoordinate, PixelPoint, ViewportSize};
use crate::{Error, Result};
use std::f64::consts::PI;

/// `round(OFFSET + RADIUS * lng * π / 180)`. Longitudes past ±180° extrapolate.
pub fn longitude_to_pixel_x(longitude: f64) -> f64 {
    (MERCATOR_OFFSET + MERCATOR_RADIUS * longitude * PI / 180.0).round()
}

/// Forward Mercator latitude. ±90° give ∓∞.
pub fn latitude_to_pixel_y(latitude: f64) -> f64 {
    let sin_lat = (latitude * PI / 180.0).sin();
    (MERCATOR_OFFSET - MERCATOR_RADIUS * ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / 2.0).round()
}

/// Latitude projection as shipped in the original app: `f32` sine and log,
/// and a `1 - sin/2` denominator. Kept for bit-compatible region math; it is
/// monotonic but not the inverse of [`pixel_y_to_latitude`].
pub fn legacy_latitude_to_pixel_y(latitude: f64) -> f64 {
    let a = 1.0_f32 + ((latitude * PI) as f32 / 180.0).sin();
    let b = 1.0_f32 - ((latitude * PI / 180.0) as f32).sin() / 2.0;
    (MERCATOR_OFFSET - MERCATOR_RADIUS * f64::from((a / b).ln())).round()
}

pub fn pixel_x_to_longitude(pixel_x: f64) -> f64 {
    ((pixel_x - MERCATOR_OFFSET) / MERCATOR_RADIUS) * 180.0 / PI
}

pub fn pixel_y_to_latitude(pixel_y: f64) -> f64 {
    (PI / 2.0 - 2.0 * ((pixel_y - MERCATOR_OFFSET) / MERCATOR_RADIUS).exp().atan()) * 180.0
        / PI
}

/// Geo-projection with configurable precision and domain handling
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoProjection {
    config: ProjectionConfig,
}

impl GeoProjection {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Reduced-precision latitude math, bit-compatible with the deployed app
    pub fn legacy() -> Self {
        Self::new(ProjectionConfig {
            precision: Precision::Legacy,
            ..ProjectionConfig::default()
        })
    }

    /// Full precision, `try_*` methods reject degenerate inputs
    pub fn strict() -> Self {
        Self::new(ProjectionConfig {
            domain_policy: DomainPolicy::Validate,
            ..ProjectionConfig::default()
        })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn longitude_to_pixel_x(&self, longitude: f64) -> f64 {
        longitude_to_pixel_x(longitude)
    }

    pub fn latitude_to_pixel_y(&self, latitude: f64) -> f64 {
        match self.config.precision {
            Precision::Full => latitude_to_pixel_y(latitude),
            Precision::Legacy => legacy_latitude_to_pixel_y(latitude),
        }
    }

    /// Legacy precision snaps to a whole pixel first, like the deployed app
    pub fn pixel_x_to_longitude(&self, pixel_x: f64) -> f64 {
        match self.config.precision {
            Precision::Full => pixel_x_to_longitude(pixel_x),
            Precision::Legacy => pixel_x_to_longitude(pixel_x.round()),
        }
    }

    pub fn pixel_y_to_latitude(&self, pixel_y: f64) -> f64 {
        match self.config.precision {
            Precision::Full => pixel_y_to_latitude(pixel_y),
            Precision::Legacy => pixel_y_to_latitude(pixel_y.round()),
        }
    }

    pub fn project(&self, coord: &GeoCoordinate) -> PixelPoint {
        PixelPoint::new(
            self.longitude_to_pixel_x(coord.lng),
            self.latitude_to_pixel_y(coord.lat),
        )
    }

    pub fn unproject(&self, pixel: &PixelPoint) -> GeoCoordinate {
        GeoCoordinate::new(
            self.pixel_y_to_latitude(pixel.y),
            self.pixel_x_to_longitude(pixel.x),
        )
    }

    /// Span visible around `center` in a viewport of the given size at `zoom_level`.
    ///
    /// The zoom is clamped to at most `max_requested_zoom` (28 by default).
    /// Each viewport unit covers `2^(20 - zoom)` pixel-space units, so one more
    /// zoom level halves the span. Never fails; poles, empty viewports and
    /// very low zooms give degenerate or non-finite spans.
    pub fn span_for_zoom(
        &self,
        center: &GeoCoordinate,
        viewport: &ViewportSize,
        zoom_level: i32,
    ) -> CoordinateSpan {
        let zoom = zoom_level.min(self.config.max_requested_zoom);
        let center_pixel = self.project(center);

        let zoom_scale = 2_f64.powi(ZOOM_SCALE_EXPONENT.saturating_sub(zoom));
        let scaled_size = PixelPoint::new(viewport.width * zoom_scale, viewport.height * zoom_scale);

        let top_left = center_pixel.subtract(&PixelPoint::new(scaled_size.x / 2.0, scaled_size.y / 2.0));
        let bottom_right = top_left.add(&scaled_size);

        let min_lng = self.pixel_x_to_longitude(top_left.x);
        let max_lng = self.pixel_x_to_longitude(bottom_right.x);

        // top_left is the northern edge, so the latitude delta flips sign
        let min_lat = self.pixel_y_to_latitude(top_left.y);
        let max_lat = self.pixel_y_to_latitude(bottom_right.y);

        let span = CoordinateSpan::new(-(max_lat - min_lat), max_lng - min_lng);
        log::trace!(
            "span_for_zoom center=({:.6}, {:.6}) zoom={} -> {:?}",
            center.lat,
            center.lng,
            zoom,
            span
        );
        if !span.is_finite() {
            log::debug!("span_for_zoom produced a non-finite span for zoom {}", zoom);
        }
        span
    }

    pub fn try_span_for_zoom(
        &self,
        center: &GeoCoordinate,
        viewport: &ViewportSize,
        zoom_level: i32,
    ) -> Result<CoordinateSpan> {
        if self.config.validates() {
            check_coordinate(center)?;
            check_viewport(viewport)?;
            let center_pixel = self.project(center);
            if !(center_pixel.x.is_finite() && center_pixel.y.is_finite()) {
                return Err(Error::NonFinite(format!(
                    "pixel position of ({}, {})",
                    center.lat, center.lng
                )));
            }
        }
        let span = self.span_for_zoom(center, viewport, zoom_level);
        if self.config.validates() && !span.is_finite() {
            return Err(Error::NonFinite(format!(
                "span around ({}, {}) at zoom {}",
                center.lat, center.lng, zoom_level
            )));
        }
        Ok(span)
    }

    /// Region centered on `center` showing the span for `zoom_level`
    pub fn region_for_zoom(
        &self,
        center: &GeoCoordinate,
        viewport: &ViewportSize,
        zoom_level: i32,
    ) -> CoordinateRegion {
        CoordinateRegion::new(*center, self.span_for_zoom(center, viewport, zoom_level))
    }

    pub fn try_region_for_zoom(
        &self,
        center: &GeoCoordinate,
        viewport: &ViewportSize,
        zoom_level: i32,
    ) -> Result<CoordinateRegion> {
        let span = self.try_span_for_zoom(center, viewport, zoom_level)?;
        Ok(CoordinateRegion::new(*center, span))
    }

    /// Approximate zoom level for a visible span, from the longitude axis only.
    ///
    /// Floored at zero (a NaN intermediate also floors to zero) and rounded to
    /// the nearest integer. A zero longitude delta yields `+∞`.
    pub fn zoom_for_span(&self, span: &CoordinateSpan, viewport_width: f64) -> f64 {
        let map_width_in_pixels = viewport_width * self.config.screen_scale;
        let zoom_scale = span.longitude_delta * MERCATOR_RADIUS * PI / (180.0 * map_width_in_pixels);
        (MAX_ZOOM_LEVEL - zoom_scale.log2()).max(0.0).round()
    }

    pub fn try_zoom_for_span(&self, span: &CoordinateSpan, viewport_width: f64) -> Result<f64> {
        if self.config.validates() {
            if !(span.longitude_delta.is_finite() && span.longitude_delta > 0.0) {
                return Err(Error::InvalidSpan(span.longitude_delta));
            }
            if !(viewport_width.is_finite() && viewport_width > 0.0) {
                return Err(Error::InvalidViewportWidth(viewport_width));
            }
        }
        Ok(self.zoom_for_span(span, viewport_width))
    }

    /// Zoom level of an existing region shown in a viewport
    pub fn zoom_of_region(&self, region: &CoordinateRegion, viewport: &ViewportSize) -> f64 {
        self.zoom_for_span(&region.span, viewport.width)
    }
}

/// Full-precision [`GeoProjection::span_for_zoom`]
pub fn span_for_zoom(center: &GeoCoordinate, viewport: &ViewportSize, zoom_level: i32) -> CoordinateSpan {
    GeoProjection::default().span_for_zoom(center, viewport, zoom_level)
}

/// [`GeoProjection::zoom_for_span`] with the default screen scale
pub fn zoom_for_span(span: &CoordinateSpan, viewport_width: f64) -> f64 {
    GeoProjection::default().zoom_for_span(span, viewport_width)
}

fn check_coordinate(coord: &GeoCoordinate) -> Result<()> {
    if coord.is_valid() {
        Ok(())
    } else {
        log::debug!("rejecting coordinate ({}, {})", coord.lat, coord.lng);
        Err(Error::InvalidCoordinate {
            lat: coord.lat,
            lng: coord.lng,
        })
    }
}

fn check_viewport(viewport: &ViewportSize) -> Result<()> {
    if viewport.is_valid() {
        Ok(())
    } else {
        log::debug!("rejecting viewport {}x{}", viewport.width, viewport.height);
        Err(Error::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_meridian_and_equator() {
        assert_eq!(longitude_to_pixel_x(0.0), 268_435_456.0);
        assert_eq!(latitude_to_pixel_y(0.0), 268_435_456.0);
        assert_eq!(legacy_latitude_to_pixel_y(0.0), 268_435_456.0);
        assert_eq!(pixel_x_to_longitude(MERCATOR_OFFSET), 0.0);
        assert!(pixel_y_to_latitude(MERCATOR_OFFSET).abs() < 1e-12);
    }

    #[test]
    fn test_antimeridian_spans_pixel_space() {
        assert_eq!(longitude_to_pixel_x(-180.0), 0.0);
        assert_eq!(longitude_to_pixel_x(180.0), 2.0 * MERCATOR_OFFSET);
    }

    #[test]
    fn test_poles_are_non_finite() {
        assert!(latitude_to_pixel_y(90.0).is_infinite());
        assert!(latitude_to_pixel_y(-90.0).is_infinite());
        assert!(latitude_to_pixel_y(90.0) < 0.0);
    }

    #[test]
    fn test_inverse_rounding_only_in_legacy() {
        assert!(pixel_x_to_longitude(268_435_456.4) > 0.0);
        assert!(pixel_y_to_latitude(268_435_455.6) > 0.0);

        let legacy = GeoProjection::legacy();
        assert_eq!(legacy.pixel_x_to_longitude(268_435_456.4), 0.0);
        assert!(legacy.pixel_y_to_latitude(268_435_455.6).abs() < 1e-12);
    }

    #[test]
    fn test_legacy_latitude_values() {
        // one f32 ulp of the log is worth a few pixels, so allow for libm differences
        assert!((legacy_latitude_to_pixel_y(45.0) - 185_462_188.0).abs() <= 16.0);
        assert!((legacy_latitude_to_pixel_y(-30.0) - 346_728_519.0).abs() <= 16.0);
        assert_eq!(latitude_to_pixel_y(45.0), 193_125_909.0);
    }

    #[test]
    fn test_legacy_precision_dispatch() {
        let legacy = GeoProjection::legacy();
        let full = GeoProjection::default();
        assert_eq!(legacy.latitude_to_pixel_y(45.0), legacy_latitude_to_pixel_y(45.0));
        assert_eq!(full.latitude_to_pixel_y(45.0), latitude_to_pixel_y(45.0));
        assert_ne!(legacy.latitude_to_pixel_y(45.0), full.latitude_to_pixel_y(45.0));
        assert_eq!(legacy.longitude_to_pixel_x(45.0), full.longitude_to_pixel_x(45.0));
    }

    #[test]
    fn test_zoom_for_span_inverts_span_for_zoom() {
        let viewport = ViewportSize::new(320.0, 480.0);
        let center = GeoCoordinate::new(0.0, 0.0);
        for zoom in 2..=19 {
            let span = span_for_zoom(&center, &viewport, zoom);
            assert_eq!(zoom_for_span(&span, viewport.width), zoom as f64);
        }
    }

    #[test]
    fn test_zoom_for_span_degenerate_inputs() {
        assert_eq!(zoom_for_span(&CoordinateSpan::square(-1.0), 320.0), 0.0);
        assert_eq!(zoom_for_span(&CoordinateSpan::square(f64::NAN), 320.0), 0.0);
        assert_eq!(zoom_for_span(&CoordinateSpan::square(0.0), 320.0), f64::INFINITY);
        // wider than the world
        assert_eq!(zoom_for_span(&CoordinateSpan::square(100_000.0), 320.0), 0.0);
    }

    #[test]
    fn test_strict_policy_rejects_degenerate_inputs() {
        let strict = GeoProjection::strict();
        let viewport = ViewportSize::new(320.0, 480.0);

        let err = strict
            .try_span_for_zoom(&GeoCoordinate::new(90.0, 0.0), &viewport, 10)
            .unwrap_err();
        assert!(matches!(err, Error::NonFinite(_)));

        let err = strict
            .try_span_for_zoom(&GeoCoordinate::new(95.0, 0.0), &viewport, 10)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));

        let err = strict
            .try_span_for_zoom(&GeoCoordinate::new(0.0, 0.0), &ViewportSize::new(0.0, 480.0), 10)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidViewport { .. }));

        let err = strict
            .try_zoom_for_span(&CoordinateSpan::square(0.0), 320.0)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSpan(_)));
    }

    #[test]
    fn test_propagate_policy_passes_non_finite_through() {
        let projection = GeoProjection::default();
        let span = projection
            .try_span_for_zoom(&GeoCoordinate::new(90.0, 0.0), &ViewportSize::new(320.0, 480.0), 10)
            .unwrap();
        // the pole projects to -inf, which collapses the latitude extent
        assert_eq!(span.latitude_delta, 0.0);
        assert_eq!(
            projection.try_zoom_for_span(&CoordinateSpan::square(-1.0), 320.0).unwrap(),
            0.0
        );
    }
}
