use crate::core::config::LabelConfig;
use crate::core::geo::GeoCoordinate;
use crate::poi::ranking::RankedPoi;
use serde::{Deserialize, Serialize};

/// A floating AR label anchored at a coordinate and altitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiLabel {
    pub name: String,
    pub coordinate: GeoCoordinate,
    pub altitude_m: f64,
    pub font_size: f64,
}

/// A map pin mirroring one AR label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub title: Option<String>,
    pub coordinate: GeoCoordinate,
    pub show_title: bool,
}

/// Lays out ranked results as stacked AR labels.
///
/// Label `n` of `c` sits `n * altitude_step_m` above `base_altitude_m` and
/// gets a font of `trunc(c / (c - n)) * 2` points, clamped to the configured
/// range, so later (nearer) results are drawn higher and larger.
pub fn layout_labels(ranked: &[RankedPoi], base_altitude_m: f64, config: &LabelConfig) -> Vec<PoiLabel> {
    let count = ranked.len() as f64;
    ranked
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let alpha = (count - index as f64) / count;
            let font_size = config.clamp_font((1.0 / alpha).trunc() * 2.0);
            let label = PoiLabel {
                name: item.poi.display_name().to_string(),
                coordinate: item.poi.coordinate,
                altitude_m: base_altitude_m + index as f64 * config.altitude_step_m,
                font_size,
            };
            log::trace!("label {:?} font {}", label.name, label.font_size);
            label
        })
        .collect()
}

/// Whether map annotations show their titles at this zoom
pub fn shows_titles(zoom: f64, config: &LabelConfig) -> bool {
    zoom > config.detail_zoom_threshold
}

pub fn annotations(ranked: &[RankedPoi], zoom: f64, config: &LabelConfig) -> Vec<Annotation> {
    let show_title = shows_titles(zoom, config);
    ranked
        .iter()
        .map(|item| Annotation {
            title: item.poi.name.clone(),
            coordinate: item.poi.coordinate,
            show_title,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poi::ranking::{rank_by_distance, PointOfInterest};

    fn ranked(count: usize) -> Vec<RankedPoi> {
        let pois = (0..count).map(|i| PointOfInterest::new(format!("poi {i}"), GeoCoordinate::new(i as f64, 0.0)));
        rank_by_distance(None, pois)
    }

    #[test]
    fn test_font_sizes_clamped_and_growing() {
        let labels = layout_labels(&ranked(20), 0.0, &LabelConfig::default());
        let fonts: Vec<f64> = labels.iter().map(|l| l.font_size).collect();

        assert_eq!(fonts[0], 8.0);
        // c / (c - n) reaches 4 at n = 15 for c = 20
        assert_eq!(fonts[15], 8.0);
        assert_eq!(fonts[16], 10.0);
        assert_eq!(fonts[19], 30.0);
        assert!(fonts.windows(2).all(|w| w[0] <= w[1]));
        assert!(fonts.iter().all(|f| (8.0..=30.0).contains(f)));
    }

    #[test]
    fn test_altitudes_stack_by_rank() {
        let labels = layout_labels(&ranked(3), 12.5, &LabelConfig::default());
        let altitudes: Vec<f64> = labels.iter().map(|l| l.altitude_m).collect();
        assert_eq!(altitudes, vec![12.5, 112.5, 212.5]);
    }

    #[test]
    fn test_unnamed_label_is_blank() {
        let ranked = rank_by_distance(None, vec![PointOfInterest::unnamed(GeoCoordinate::default())]);
        let labels = layout_labels(&ranked, 0.0, &LabelConfig::default());
        assert_eq!(labels[0].name, "");
        assert!(layout_labels(&[], 0.0, &LabelConfig::default()).is_empty());
    }

    #[test]
    fn test_titles_only_above_threshold() {
        let config = LabelConfig::default();
        assert!(!shows_titles(10.0, &config));
        assert!(shows_titles(11.0, &config));

        let pins = annotations(&ranked(2), 12.0, &config);
        assert!(pins.iter().all(|a| a.show_title));
        assert_eq!(pins[0].title.as_deref(), Some("poi 0"));
        assert!(annotations(&ranked(2), 10.0, &config).iter().all(|a| !a.show_title));
    }
}
