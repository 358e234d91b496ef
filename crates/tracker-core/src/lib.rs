//! Exercise Tracker Core Library
//!
//! Error types, storage port traits and input coercion rules shared by the
//! tracker services.

// Re-export pure types from tracker-types
pub use tracker_types::*;

pub mod error;
pub mod input;
pub mod ports;

pub use error::{Result, StoreError, StoreResult, TrackerError};
pub use ports::{ExerciseQuery, ExerciseStore, SortOrder, UserStore};
