//! Program module - 5/3/1 training maxes and cycle planning
//!
//! Features:
//! - Training max derived from the one-rep max
//! - Set weights rounded to loadable increments
//! - Four-week cycle generation with warm-ups, AMRAP sets and a deload

pub mod training_max;
pub mod workouts;

pub use training_max::{calculate_set_weight, calculate_training_max, TrainingMax};
pub use workouts::{
    generate_week, generate_workouts, generate_workouts_for_week, WeekScheme, Workout, WorkoutSet,
};
