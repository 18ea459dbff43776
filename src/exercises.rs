//! Exercise definitions - the four 5/3/1 main lifts and their assistance work

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Main lifts programmed by the 5/3/1 cycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MainLift {
    Squat,
    Bench,
    Deadlift,
    OverheadPress,
}

impl MainLift {
    /// Cycle order: squat, bench, deadlift, overhead press
    pub fn all() -> &'static [MainLift] {
        &[
            MainLift::Squat,
            MainLift::Bench,
            MainLift::Deadlift,
            MainLift::OverheadPress,
        ]
    }

    /// Stable id used in stored records
    pub fn id(&self) -> &'static str {
        match self {
            MainLift::Squat => "squat",
            MainLift::Bench => "bench",
            MainLift::Deadlift => "deadlift",
            MainLift::OverheadPress => "ohp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MainLift::Squat => "Squat",
            MainLift::Bench => "Bench Press",
            MainLift::Deadlift => "Deadlift",
            MainLift::OverheadPress => "Overhead Press",
        }
    }

    /// Suggested accessory work done after the main sets
    pub fn assistance(&self) -> &'static [&'static str] {
        match self {
            MainLift::Squat => SQUAT_ASSISTANCE,
            MainLift::Bench => BENCH_ASSISTANCE,
            MainLift::Deadlift => DEADLIFT_ASSISTANCE,
            MainLift::OverheadPress => PRESS_ASSISTANCE,
        }
    }
}

impl FromStr for MainLift {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "squat" | "back squat" => Ok(MainLift::Squat),
            "bench" | "bench press" => Ok(MainLift::Bench),
            "deadlift" | "dl" => Ok(MainLift::Deadlift),
            "ohp" | "press" | "overhead press" | "overhead_press" => Ok(MainLift::OverheadPress),
            _ => Err(ParseError::UnknownLift(s.to_string())),
        }
    }
}

impl fmt::Display for MainLift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

const SQUAT_ASSISTANCE: &[&str] = &["Leg Press", "Walking Lunges", "Hanging Leg Raises"];

const BENCH_ASSISTANCE: &[&str] = &["Dumbbell Bench Press", "Dumbbell Rows", "Dips"];

const DEADLIFT_ASSISTANCE: &[&str] = &["Good Mornings", "Back Extensions", "Ab Wheel"];

const PRESS_ASSISTANCE: &[&str] = &["Chin-ups", "Face Pulls", "Dumbbell Lateral Raises"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_cycle_order() {
        let ids: Vec<&str> = MainLift::all().iter().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["squat", "bench", "deadlift", "ohp"]);
    }

    #[test]
    fn test_parse_ids_round_trip() {
        for lift in MainLift::all() {
            assert_eq!(lift.id().parse::<MainLift>().unwrap(), *lift);
        }
    }

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!("Overhead Press".parse::<MainLift>().unwrap(), MainLift::OverheadPress);
        assert_eq!(" PRESS ".parse::<MainLift>().unwrap(), MainLift::OverheadPress);
        assert_eq!("Bench Press".parse::<MainLift>().unwrap(), MainLift::Bench);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "curl".parse::<MainLift>().unwrap_err();
        assert!(err.to_string().contains("curl"));
    }

    #[test]
    fn test_every_lift_has_assistance() {
        for lift in MainLift::all() {
            assert!(!lift.assistance().is_empty(), "{} has no assistance", lift);
        }
    }
}
