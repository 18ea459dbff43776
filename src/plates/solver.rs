//! Plate loading calculator
//!
//! Greedy, heaviest plate first. Exact for standard gym denominations, but
//! for custom inventories it can miss a loading that another combination
//! would hit (30 per side from 25s and 15s picks 25 and stops 5 short).
//! The greedy result is the expected output; do not replace it with a search.

use serde::Serialize;
use tracing::debug;

use super::PlateSet;

/// Remaining weight below this counts as an exact load
const EXACT_TOLERANCE: f64 = 0.01;

/// Plates of one denomination on each side of the bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateCount {
    pub plate_weight: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlateCalculation {
    pub target_weight: f64,
    pub bar_weight: f64,
    pub total_weight: f64,
    pub plates_per_side: Vec<PlateCount>,
    /// Per-side weight the inventory could not cover
    pub remaining_weight: f64,
    pub is_exact: bool,
}

impl PlateCalculation {
    /// e.g. `135: bar 45 + per side 45` or `... (short 2.5 per side)`
    pub fn format(&self) -> String {
        let side = if self.plates_per_side.is_empty() {
            "empty bar".to_string()
        } else {
            let parts: Vec<String> = self
                .plates_per_side
                .iter()
                .map(|p| {
                    if p.quantity == 1 {
                        format!("{}", p.plate_weight)
                    } else {
                        format!("{}x{}", p.plate_weight, p.quantity)
                    }
                })
                .collect();
            format!("per side {}", parts.join(" + "))
        };

        let mut line = format!("{}: bar {} + {}", self.total_weight, self.bar_weight, side);
        if !self.is_exact {
            line.push_str(&format!(
                " (target {}, short {} per side)",
                self.target_weight, self.remaining_weight
            ));
        }
        line
    }
}

/// Load `target_weight` onto the bar of `plate_set`.
pub fn calculate_plates(target_weight: f64, plate_set: &PlateSet) -> PlateCalculation {
    let weight_to_load = (target_weight - plate_set.bar_weight).max(0.0);
    let mut remaining = weight_to_load / 2.0;

    let mut available: Vec<_> = plate_set
        .plates
        .iter()
        .filter(|p| p.is_active && p.quantity > 0)
        .collect();
    available.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut plates_per_side = Vec::new();
    for plate in available {
        let max_pairs = plate.pairs();
        let needed = (remaining / plate.weight).floor() as u32;
        let to_use = needed.min(max_pairs);

        if to_use > 0 {
            plates_per_side.push(PlateCount {
                plate_weight: plate.weight,
                quantity: to_use,
            });
            remaining -= to_use as f64 * plate.weight;
        }
    }

    let loaded: f64 = plates_per_side
        .iter()
        .map(|p| p.quantity as f64 * p.plate_weight)
        .sum();
    let is_exact = remaining.abs() < EXACT_TOLERANCE;

    if !is_exact {
        debug!(
            target_weight,
            set = %plate_set.name,
            remaining,
            "plate set cannot load target exactly"
        );
    }

    PlateCalculation {
        target_weight,
        bar_weight: plate_set.bar_weight,
        total_weight: plate_set.bar_weight + 2.0 * loaded,
        plates_per_side,
        remaining_weight: remaining,
        is_exact,
    }
}
