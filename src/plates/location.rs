//! Pick the plate set of the gym you are standing in

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

use super::PlateSet;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A plate set within this distance counts as "here"
pub const NEARBY_KM: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checked constructor for user input: latitude in [-90, 90],
    /// longitude in [-180, 180]
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, ParseError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ParseError::InvalidLocation(format!("{}, {}", latitude, longitude)));
        }
        Ok(Self::new(latitude, longitude))
    }
}

/// Great-circle distance in kilometres
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let (lat_a, lat_b) = (a.latitude.to_radians(), b.latitude.to_radians());
    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// First plate set tagged within 1 km of `location`.
///
/// Linear scan; inventories are a handful of gyms at most.
pub fn current_location_plate_set(
    location: Option<GeoPoint>,
    sets: &[PlateSet],
) -> Option<&PlateSet> {
    let here = location?;
    sets.iter().find(|set| {
        set.location
            .is_some_and(|gym| haversine_km(here, gym) <= NEARBY_KM)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plates::Plate;

    /// Point `km` due north of `from`
    fn north_of(from: GeoPoint, km: f64) -> GeoPoint {
        let dlat = (km / EARTH_RADIUS_KM).to_degrees();
        GeoPoint::new(from.latitude + dlat, from.longitude)
    }

    fn gym(name: &str, location: Option<GeoPoint>) -> PlateSet {
        let set = PlateSet::new(name, 45.0, vec![Plate::new(45.0, 4)]);
        match location {
            Some(point) => set.with_location(point),
            None => set,
        }
    }

    const HOME: GeoPoint = GeoPoint {
        latitude: 55.7558,
        longitude: 37.6173,
    };

    #[test]
    fn test_identical_points() {
        assert_eq!(haversine_km(HOME, HOME), 0.0);
    }

    #[test]
    fn test_known_distance() {
        // one degree of latitude ~ 111.19 km
        let d = haversine_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "distance: {}", d);
    }

    #[test]
    fn test_north_of_helper() {
        let d = haversine_km(HOME, north_of(HOME, 0.9));
        assert!((d - 0.9).abs() < 1e-6, "distance: {}", d);
    }

    #[test]
    fn test_nearby_selected() {
        let sets = vec![gym("near", Some(north_of(HOME, 0.9)))];
        let found = current_location_plate_set(Some(HOME), &sets);
        assert_eq!(found.map(|s| s.name.as_str()), Some("near"));
    }

    #[test]
    fn test_far_not_selected() {
        let sets = vec![gym("far", Some(north_of(HOME, 1.1)))];
        assert!(current_location_plate_set(Some(HOME), &sets).is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let sets = vec![
            gym("untagged", None),
            gym("far", Some(north_of(HOME, 5.0))),
            gym("first", Some(north_of(HOME, 0.5))),
            gym("second", Some(HOME)),
        ];
        let found = current_location_plate_set(Some(HOME), &sets);
        assert_eq!(found.map(|s| s.name.as_str()), Some("first"));
    }

    #[test]
    fn test_no_location() {
        let sets = vec![gym("here", Some(HOME))];
        assert!(current_location_plate_set(None, &sets).is_none());
    }

    #[test]
    fn test_try_new_checks_ranges() {
        assert_eq!(GeoPoint::try_new(55.7558, 37.6173).unwrap(), HOME);
        assert!(GeoPoint::try_new(-33.8688, 151.2093).is_ok());
        assert!(GeoPoint::try_new(90.0, -180.0).is_ok());
        assert!(GeoPoint::try_new(95.0, 10.0).is_err());
        assert!(GeoPoint::try_new(10.0, -181.0).is_err());
        assert!(GeoPoint::try_new(f64::NAN, 10.0).is_err());
    }
}
