//! Configuration for projection math, label layout and search behaviour
//!
//! Settings are grouped per concern and aggregated in [`Config`]. Presets are
//! available through [`ConfigProfile`], and every struct round-trips through
//! JSON so a config file can be handed to the app at startup.

use crate::core::constants::{
    DETAIL_ZOOM_THRESHOLD, INITIAL_ZOOM, LABEL_ALTITUDE_STEP_M, MAX_LABEL_FONT,
    MAX_REQUESTED_ZOOM, MIN_LABEL_FONT, SCREEN_SCALE, SEARCH_SPAN_DEGREES,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfigProfile {
    /// Full-precision projection, degenerate inputs propagate as non-finite values
    #[default]
    Standard,
    /// Reproduces the reduced-precision latitude math of the deployed app
    Legacy,
    /// Full precision with input validation on the `try_*` paths
    Strict,
    Custom(Config),
}

impl ConfigProfile {
    pub fn resolve(&self) -> Config {
        match self {
            Self::Standard => Config::default(),
            Self::Legacy => Config {
                projection: ProjectionConfig {
                    precision: Precision::Legacy,
                    ..ProjectionConfig::default()
                },
                ..Config::default()
            },
            Self::Strict => Config {
                projection: ProjectionConfig {
                    domain_policy: DomainPolicy::Validate,
                    ..ProjectionConfig::default()
                },
                ..Config::default()
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

/// Arithmetic used for the forward latitude projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// `f64` throughout, exact inverse of the `atan(exp(·))` unprojection
    #[default]
    Full,
    /// `f32` sine/log with the deployed app's `1 - sin/2` denominator
    Legacy,
}

/// What the fallible projection paths do with out-of-domain inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPolicy {
    /// Hand back whatever the arithmetic produces, including NaN/∞
    #[default]
    Propagate,
    /// Reject out-of-range inputs and non-finite outputs with an error
    Validate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub precision: Precision,
    pub domain_policy: DomainPolicy,
    /// Device pixels per viewport unit used when deriving a zoom level
    pub screen_scale: f64,
    /// Requested zoom levels are clamped to at most this value
    pub max_requested_zoom: i32,
}

impl ProjectionConfig {
    pub fn validates(&self) -> bool {
        self.domain_policy == DomainPolicy::Validate
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            precision: Precision::Full,
            domain_policy: DomainPolicy::Propagate,
            screen_scale: SCREEN_SCALE,
            max_requested_zoom: MAX_REQUESTED_ZOOM,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub min_font_size: f64,
    pub max_font_size: f64,
    pub altitude_step_m: f64,
    /// Map annotation titles are shown strictly above this zoom
    pub detail_zoom_threshold: f64,
}

impl LabelConfig {
    /// Bounds `size` to the font range. An inverted range resolves to
    /// `max_font_size` rather than panicking.
    pub fn clamp_font(&self, size: f64) -> f64 {
        size.max(self.min_font_size).min(self.max_font_size)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            min_font_size: MIN_LABEL_FONT,
            max_font_size: MAX_LABEL_FONT,
            altitude_step_m: LABEL_ALTITUDE_STEP_M,
            detail_zoom_threshold: DETAIL_ZOOM_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub span_degrees: f64,
    pub initial_zoom: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            span_degrees: SEARCH_SPAN_DEGREES,
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub projection: ProjectionConfig,
    pub labels: LabelConfig,
    pub search: SearchConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings no computation could make sense of
    pub fn check(&self) -> Result<()> {
        let labels = &self.labels;
        if !(labels.min_font_size > 0.0 && labels.min_font_size <= labels.max_font_size) {
            return Err(Error::Config(format!(
                "font size range [{}, {}] is empty or non-positive",
                labels.min_font_size, labels.max_font_size
            )));
        }
        if !(self.projection.screen_scale > 0.0 && self.projection.screen_scale.is_finite()) {
            return Err(Error::Config(format!(
                "screen_scale must be positive, got {}",
                self.projection.screen_scale
            )));
        }
        if !(self.search.span_degrees > 0.0 && self.search.span_degrees.is_finite()) {
            return Err(Error::Config(format!(
                "search span must be positive, got {}",
                self.search.span_degrees
            )));
        }
        Ok(())
    }
}
