//! ironplan - 5/3/1 strength training planner
//!
//! Training maxes, cycle planning, plate math and a one-rep max log.

pub mod db;
pub mod error;
pub mod exercises;
pub mod plates;
pub mod program;
pub mod progress;
