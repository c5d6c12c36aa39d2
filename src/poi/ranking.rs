use crate::core::geo::GeoCoordinate;
use serde::{Deserialize, Serialize};

/// A search result: an optional display name at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    #[serde(default)]
    pub name: Option<String>,
    pub coordinate: GeoCoordinate,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        Self {
            name: Some(name.into()),
            coordinate,
        }
    }

    pub fn unnamed(coordinate: GeoCoordinate) -> Self {
        Self {
            name: None,
            coordinate,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPoi {
    pub poi: PointOfInterest,
    /// Great-circle distance from the ranking origin
    pub distance_km: f64,
    /// Position after ranking, 0 = farthest
    pub rank: usize,
}

/// Orders points farthest first by great-circle distance from `origin`.
///
/// The nearest result ends up last so it is placed on top of the label
/// stack. Without an origin every distance is zero and the input order is
/// kept, since the sort is stable.
pub fn rank_by_distance<I>(origin: Option<&GeoCoordinate>, pois: I) -> Vec<RankedPoi>
where
    I: IntoIterator<Item = PointOfInterest>,
{
    let mut ranked: Vec<RankedPoi> = pois
        .into_iter()
        .map(|poi| {
            let distance_km = origin
                .map(|origin| origin.distance_to(&poi.coordinate) / 1000.0)
                .unwrap_or(0.0);
            RankedPoi {
                poi,
                distance_km,
                rank: 0,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.distance_km.total_cmp(&a.distance_km));
    for (rank, item) in ranked.iter_mut().enumerate() {
        item.rank = rank;
    }

    if origin.is_none() && !ranked.is_empty() {
        log::debug!("ranking {} results without a known location", ranked.len());
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farthest_first() {
        let origin = GeoCoordinate::new(37.7749, -122.4194);
        let pois = vec![
            PointOfInterest::new("near", GeoCoordinate::new(37.7750, -122.4195)),
            PointOfInterest::new("far", GeoCoordinate::new(37.8049, -122.4194)),
            PointOfInterest::new("mid", GeoCoordinate::new(37.7849, -122.4194)),
        ];

        let ranked = rank_by_distance(Some(&origin), pois);
        let names: Vec<&str> = ranked.iter().map(|r| r.poi.display_name()).collect();
        assert_eq!(names, vec!["far", "mid", "near"]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![0, 1, 2]);

        // 0.03° of latitude is roughly 3.3 km
        assert!((ranked[0].distance_km - 3.34).abs() < 0.05);
    }

    #[test]
    fn test_unknown_origin_keeps_order() {
        let pois = vec![
            PointOfInterest::new("a", GeoCoordinate::new(1.0, 1.0)),
            PointOfInterest::unnamed(GeoCoordinate::new(2.0, 2.0)),
            PointOfInterest::new("c", GeoCoordinate::new(3.0, 3.0)),
        ];

        let ranked = rank_by_distance(None, pois.clone());
        assert!(ranked.iter().all(|r| r.distance_km == 0.0));
        let kept: Vec<PointOfInterest> = ranked.into_iter().map(|r| r.poi).collect();
        assert_eq!(kept, pois);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_by_distance(Some(&GeoCoordinate::default()), Vec::new()).is_empty());
    }
}
