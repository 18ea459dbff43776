//! Plates module - plate inventories, loading calculator and gym selection

pub mod location;
pub mod solver;

pub use location::{current_location_plate_set, haversine_km, GeoPoint};
pub use solver::{calculate_plates, PlateCalculation, PlateCount};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One plate denomination in an inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub weight: f64,
    /// Total plates owned; loading needs pairs
    pub quantity: u32,
    pub is_active: bool,
}

impl Plate {
    pub fn new(weight: f64, quantity: u32) -> Self {
        Self {
            weight,
            quantity,
            is_active: true,
        }
    }

    pub fn pairs(&self) -> u32 {
        self.quantity / 2
    }
}

/// Parses `45x4` (weight x quantity) into an active plate
impl FromStr for Plate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidPlate(s.to_string());
        let (weight, quantity) = s
            .trim()
            .to_lowercase()
            .split_once('x')
            .map(|(w, q)| (w.trim().to_string(), q.trim().to_string()))
            .ok_or_else(invalid)?;

        let weight: f64 = weight.parse().map_err(|_| invalid())?;
        let quantity: u32 = quantity.parse().map_err(|_| invalid())?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(invalid());
        }

        Ok(Plate::new(weight, quantity))
    }
}

/// A named bar + plate inventory, optionally pinned to a gym location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlateSet {
    pub name: String,
    pub bar_weight: f64,
    pub plates: Vec<Plate>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl PlateSet {
    pub fn new(name: impl Into<String>, bar_weight: f64, plates: Vec<Plate>) -> Self {
        Self {
            name: name.into(),
            bar_weight,
            plates,
            location: None,
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Commercial gym in pounds: 45 lb bar
    pub fn standard_lb() -> Self {
        Self::new(
            "standard-lb",
            45.0,
            vec![
                Plate::new(45.0, 4),
                Plate::new(35.0, 2),
                Plate::new(25.0, 2),
                Plate::new(10.0, 4),
                Plate::new(5.0, 4),
                Plate::new(2.5, 2),
            ],
        )
    }

    /// Olympic set in kilograms: 20 kg bar
    pub fn standard_kg() -> Self {
        Self::new(
            "standard-kg",
            20.0,
            vec![
                Plate::new(25.0, 4),
                Plate::new(20.0, 2),
                Plate::new(15.0, 2),
                Plate::new(10.0, 2),
                Plate::new(5.0, 4),
                Plate::new(2.5, 2),
                Plate::new(1.25, 2),
            ],
        )
    }

    /// Flip `is_active` on every plate of this weight; false if none matched
    pub fn toggle_plate(&mut self, weight: f64) -> bool {
        let mut found = false;
        for plate in self.plates.iter_mut().filter(|p| p.weight == weight) {
            plate.is_active = !plate.is_active;
            found = true;
        }
        found
    }

    /// Heaviest weight this set can load
    pub fn max_load(&self) -> f64 {
        self.bar_weight
            + self
                .plates
                .iter()
                .filter(|p| p.is_active)
                .map(|p| 2.0 * p.pairs() as f64 * p.weight)
                .sum::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plate() {
        let plate: Plate = "45x4".parse().unwrap();
        assert_eq!(plate, Plate::new(45.0, 4));

        let plate: Plate = " 2.5 X 2 ".parse().unwrap();
        assert_eq!(plate.weight, 2.5);
        assert_eq!(plate.quantity, 2);
        assert!(plate.is_active);
    }

    #[test]
    fn test_parse_plate_invalid() {
        assert!("45".parse::<Plate>().is_err());
        assert!("x4".parse::<Plate>().is_err());
        assert!("45x".parse::<Plate>().is_err());
        assert!("0x4".parse::<Plate>().is_err());
        assert!("-5x2".parse::<Plate>().is_err());
    }

    #[test]
    fn test_pairs() {
        assert_eq!(Plate::new(45.0, 5).pairs(), 2);
        assert_eq!(Plate::new(45.0, 1).pairs(), 0);
    }

    #[test]
    fn test_standard_sets() {
        // 45 + 2 * (90 + 35 + 25 + 20 + 10 + 2.5)
        assert_eq!(PlateSet::standard_lb().max_load(), 410.0);
        // 20 + 2 * (50 + 20 + 15 + 10 + 10 + 2.5 + 1.25)
        assert_eq!(PlateSet::standard_kg().max_load(), 237.5);
    }

    #[test]
    fn test_toggle_plate() {
        let mut set = PlateSet::standard_lb();
        assert!(set.toggle_plate(35.0));
        assert!(!set.plates[1].is_active);
        assert_eq!(set.max_load(), 340.0);
        assert!(set.toggle_plate(35.0));
        assert!(set.plates[1].is_active);
        assert!(!set.toggle_plate(100.0));
    }

    #[test]
    fn test_max_load_ignores_inactive() {
        let mut set = PlateSet::new("home", 45.0, vec![Plate::new(45.0, 2), Plate::new(25.0, 2)]);
        set.plates[0].is_active = false;
        assert_eq!(set.max_load(), 95.0);
    }
}
