//! 5/3/1 cycle generation
//!
//! Four weeks per lift: three warm-up sets, then three main sets whose
//! percentages climb over weeks 1-3 before a deload in week 4.

use serde::Serialize;

use crate::exercises::MainLift;

use super::training_max::{calculate_set_weight, TrainingMax};

/// Weeks in one cycle
pub const CYCLE_WEEKS: u8 = 4;

/// (percentage, reps) for the warm-up, identical every week
const WARMUP: [(f64, u32); 3] = [(40.0, 5), (50.0, 5), (60.0, 3)];

/// Main-set scheme for one week of the cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeekScheme {
    pub week: u8,
    pub sets: [(f64, u32); 3],
    /// Last main set is taken for as many reps as possible
    pub amrap: bool,
}

impl WeekScheme {
    pub fn for_week(week: u8) -> Option<WeekScheme> {
        let (sets, amrap) = match week {
            1 => ([(65.0, 5), (75.0, 5), (85.0, 5)], true),
            2 => ([(70.0, 3), (80.0, 3), (90.0, 3)], true),
            3 => ([(75.0, 5), (85.0, 3), (95.0, 1)], true),
            4 => ([(40.0, 5), (50.0, 5), (60.0, 5)], false),
            _ => return None,
        };
        Some(WeekScheme { week, sets, amrap })
    }

    pub fn is_deload(&self) -> bool {
        !self.amrap
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutSet {
    pub reps: u32,
    pub percentage: f64,
    pub weight: f64,
    pub is_amrap: bool,
}

impl WorkoutSet {
    fn at(training_max: f64, percentage: f64, reps: u32, is_amrap: bool) -> Self {
        Self {
            reps,
            percentage,
            weight: calculate_set_weight(training_max, percentage),
            is_amrap,
        }
    }

    /// e.g. `255 x 5+ (85%)`
    pub fn format(&self) -> String {
        format!(
            "{} x {}{} ({}%)",
            self.weight,
            self.reps,
            if self.is_amrap { "+" } else { "" },
            self.percentage
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workout {
    pub lift: MainLift,
    pub week: u8,
    pub training_max: f64,
    pub warmup_sets: Vec<WorkoutSet>,
    pub main_sets: Vec<WorkoutSet>,
    pub assistance: &'static [&'static str],
}

impl Workout {
    pub fn title(&self) -> String {
        match WeekScheme::for_week(self.week) {
            Some(scheme) if scheme.is_deload() => {
                format!("Week {} (deload) - {}", self.week, self.lift)
            }
            _ => format!("Week {} - {}", self.week, self.lift),
        }
    }

    /// The AMRAP set, if this week has one
    pub fn amrap_set(&self) -> Option<&WorkoutSet> {
        self.main_sets.iter().find(|s| s.is_amrap)
    }

    /// Multi-line summary for the terminal
    pub fn format(&self) -> String {
        let mut lines = vec![format!("{} (TM {})", self.title(), self.training_max)];
        for set in &self.warmup_sets {
            lines.push(format!("  warm-up  {}", set.format()));
        }
        for set in &self.main_sets {
            lines.push(format!("  main     {}", set.format()));
        }
        lines.push(format!("  assist   {}", self.assistance.join(", ")));
        lines.join("\n")
    }
}

/// Look up the max for a lift. First matching entry wins; ids that name no
/// main lift never match.
fn find_max(maxes: &[TrainingMax], lift: MainLift) -> Option<&TrainingMax> {
    maxes
        .iter()
        .find(|m| m.exercise_id.parse::<MainLift>().ok() == Some(lift))
}

/// Build one week's workout for a lift
pub fn generate_week(lift: MainLift, training_max: f64, scheme: &WeekScheme) -> Workout {
    let warmup_sets = WARMUP
        .iter()
        .map(|&(pct, reps)| WorkoutSet::at(training_max, pct, reps, false))
        .collect();

    let last = scheme.sets.len() - 1;
    let main_sets = scheme
        .sets
        .iter()
        .enumerate()
        .map(|(i, &(pct, reps))| {
            WorkoutSet::at(training_max, pct, reps, scheme.amrap && i == last)
        })
        .collect();

    Workout {
        lift,
        week: scheme.week,
        training_max,
        warmup_sets,
        main_sets,
        assistance: lift.assistance(),
    }
}

/// Full cycle for every lift that has a max, lift by lift, weeks 1-4.
/// Lifts without a max are skipped.
pub fn generate_workouts(maxes: &[TrainingMax]) -> Vec<Workout> {
    let mut workouts = Vec::new();

    for &lift in MainLift::all() {
        let Some(max) = find_max(maxes, lift) else {
            continue;
        };
        let training_max = max.training_max();

        for week in 1..=CYCLE_WEEKS {
            if let Some(scheme) = WeekScheme::for_week(week) {
                workouts.push(generate_week(lift, training_max, &scheme));
            }
        }
    }

    workouts
}

/// One week of the cycle for every lift that has a max, in lift order.
/// `None` if `week` is outside 1-4.
pub fn generate_workouts_for_week(maxes: &[TrainingMax], week: u8) -> Option<Vec<Workout>> {
    let scheme = WeekScheme::for_week(week)?;
    let workouts = MainLift::all()
        .iter()
        .filter_map(|&lift| {
            find_max(maxes, lift).map(|max| generate_week(lift, max.training_max(), &scheme))
        })
        .collect();
    Some(workouts)
}
