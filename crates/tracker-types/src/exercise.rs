//! Exercise and log types

use crate::calendar;
use crate::user::User;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted exercise record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    /// Owner's username at creation time
    pub username: String,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub date: NaiveDate,
}

/// Exercise creation request, already validated against its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    pub user_id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl NewExercise {
    pub fn for_user(user: &User, description: String, duration: i64, date: NaiveDate) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            description,
            duration,
            date,
        }
    }
}

/// Response to a successful exercise creation. `_id` is the owner's id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseReceipt {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(serialize_with = "calendar::serialize_calendar")]
    pub date: NaiveDate,
    #[serde(rename = "_id")]
    pub user_id: String,
}

impl From<Exercise> for ExerciseReceipt {
    fn from(exercise: Exercise) -> Self {
        Self {
            username: exercise.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            user_id: exercise.user_id,
        }
    }
}

/// One line of a user's log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    #[serde(serialize_with = "calendar::serialize_calendar")]
    pub date: NaiveDate,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Log summary for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl ExerciseLog {
    /// Build a log; `count` always tracks `log.len()`
    pub fn new(user: User, log: Vec<LogEntry>) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}
