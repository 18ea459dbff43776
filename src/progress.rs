//! One-rep max history analytics

use crate::db::OneRepMaxEntry;
use crate::exercises::MainLift;
use crate::program::TrainingMax;

/// Progress view over logged one-rep maxes
pub struct Progress {
    entries: Vec<OneRepMaxEntry>,
}

impl Progress {
    pub fn new(mut entries: Vec<OneRepMaxEntry>) -> Self {
        entries.sort_by_key(|e| e.date);
        Self { entries }
    }

    /// Entries for an exercise, oldest first. Main lifts match by alias,
    /// anything else by case-insensitive name.
    fn for_exercise(&self, exercise: &str) -> Vec<&OneRepMaxEntry> {
        let lift = exercise.parse::<MainLift>().ok();
        self.entries
            .iter()
            .filter(|e| match lift {
                Some(lift) => e.exercise_id.parse::<MainLift>().ok() == Some(lift),
                None => e.exercise_id.eq_ignore_ascii_case(exercise),
            })
            .collect()
    }

    /// Most recent entry for an exercise
    pub fn latest(&self, exercise: &str) -> Option<&OneRepMaxEntry> {
        self.for_exercise(exercise).last().copied()
    }

    /// Heaviest entry for an exercise
    pub fn best(&self, exercise: &str) -> Option<&OneRepMaxEntry> {
        self.for_exercise(exercise)
            .into_iter()
            .max_by(|a, b| a.weight.total_cmp(&b.weight))
    }

    /// Latest minus earliest weight; needs two entries
    pub fn progress(&self, exercise: &str) -> Option<f64> {
        let entries = self.for_exercise(exercise);
        if entries.len() < 2 {
            return None;
        }
        let first = entries.first()?;
        let last = entries.last()?;
        Some(last.weight - first.weight)
    }

    /// Current max per main lift from its latest entry, in cycle order
    pub fn training_maxes(&self) -> Vec<TrainingMax> {
        MainLift::all()
            .iter()
            .filter_map(|lift| {
                self.latest(lift.id())
                    .map(|e| TrainingMax::new(lift.id(), e.weight))
            })
            .collect()
    }

    /// Entries newest first, optionally for one exercise
    pub fn recent(&self, exercise: Option<&str>, limit: usize) -> Vec<&OneRepMaxEntry> {
        match exercise {
            Some(ex) => self.for_exercise(ex).into_iter().rev().take(limit).collect(),
            None => self.entries.iter().rev().take(limit).collect(),
        }
    }
}
