//! Training max and percentage-based set weights
//!
//! Weights are rounded to what can actually be loaded: 5 above 200,
//! 2.5 otherwise.

use serde::{Deserialize, Serialize};

/// Fraction of the one-rep max used as the programming base
pub const TRAINING_MAX_FACTOR: f64 = 0.9;

/// Raw set weights above this use the coarse increment
const COARSE_THRESHOLD: f64 = 200.0;
const COARSE_INCREMENT: f64 = 5.0;
const FINE_INCREMENT: f64 = 2.5;

/// One-rep max for an exercise. The training max is derived on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingMax {
    pub exercise_id: String,
    pub one_rep_max: f64,
}

impl TrainingMax {
    pub fn new(exercise_id: impl Into<String>, one_rep_max: f64) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            one_rep_max,
        }
    }

    pub fn training_max(&self) -> f64 {
        calculate_training_max(self.one_rep_max)
    }
}

/// `round(one_rep_max * 0.9)`, ties away from zero
pub fn calculate_training_max(one_rep_max: f64) -> f64 {
    (one_rep_max * TRAINING_MAX_FACTOR).round()
}

/// Increment a raw (unrounded) set weight snaps to
pub fn increment_for(raw_weight: f64) -> f64 {
    if raw_weight > COARSE_THRESHOLD {
        COARSE_INCREMENT
    } else {
        FINE_INCREMENT
    }
}

/// Weight for a set at `percentage` of the training max.
///
/// The increment bucket is picked from the raw weight, so 201 rounds to 200
/// (nearest 5) while 199 rounds to 200 as well (nearest 2.5).
pub fn calculate_set_weight(training_max: f64, percentage: f64) -> f64 {
    let raw = training_max * percentage / 100.0;
    round_to_increment(raw, increment_for(raw))
}

fn round_to_increment(value: f64, increment: f64) -> f64 {
    (value / increment).round() * increment
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERCENTAGES: &[f64] = &[40.0, 50.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0];

    #[test]
    fn test_training_max_300() {
        assert_eq!(calculate_training_max(300.0), 270.0);
    }

    #[test]
    fn test_training_max_zero() {
        assert_eq!(calculate_training_max(0.0), 0.0);
    }

    #[test]
    fn test_training_max_rounds_half_up() {
        // 405 * 0.9 = 364.5
        assert_eq!(calculate_training_max(405.0), 365.0);
        // 101 * 0.9 = 90.9
        assert_eq!(calculate_training_max(101.0), 91.0);
    }

    #[test]
    fn test_training_max_follows_one_rep_max() {
        let mut tm = TrainingMax::new("squat", 300.0);
        assert_eq!(tm.training_max(), 270.0);
        tm.one_rep_max = 200.0;
        assert_eq!(tm.training_max(), 180.0);
    }

    #[test]
    fn test_set_weight_300_85() {
        assert_eq!(calculate_set_weight(300.0, 85.0), 255.0);
    }

    #[test]
    fn test_set_weight_fine_increment() {
        // 270 * 0.65 = 175.5 -> 175
        assert_eq!(calculate_set_weight(270.0, 65.0), 175.0);
        // 100 * 0.40 = 40
        assert_eq!(calculate_set_weight(100.0, 40.0), 40.0);
    }

    #[test]
    fn test_set_weight_tie_rounds_up() {
        // 52.5 * 0.5 = 26.25 -> 10.5 increments of 2.5 -> 27.5
        assert_eq!(calculate_set_weight(52.5, 50.0), 27.5);
        // 405 * 0.5 = 202.5 -> 40.5 fives -> 205
        assert_eq!(calculate_set_weight(405.0, 50.0), 205.0);
    }

    #[test]
    fn test_set_weight_bucket_uses_raw_weight() {
        // raw 201 -> coarse bucket -> 200
        assert_eq!(calculate_set_weight(201.0, 100.0), 200.0);
        // raw 199 -> fine bucket -> 200 (79.6 increments of 2.5)
        assert_eq!(calculate_set_weight(199.0, 100.0), 200.0);
        // raw exactly 200 stays in the fine bucket
        assert_eq!(increment_for(200.0), 2.5);
        assert_eq!(increment_for(200.1), 5.0);
    }

    #[test]
    fn test_set_weight_always_loadable() {
        let mut tm = 0.0;
        while tm <= 600.0 {
            for &p in PERCENTAGES {
                let raw = tm * p / 100.0;
                let weight = calculate_set_weight(tm, p);
                let inc = increment_for(raw);
                assert_eq!(weight % inc, 0.0, "tm={} p={} weight={}", tm, p, weight);
            }
            tm += 7.5;
        }
    }

    #[test]
    fn test_set_weight_zero_training_max() {
        assert_eq!(calculate_set_weight(0.0, 85.0), 0.0);
    }
}
