//! Error types for the exercise tracker

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Failure reported by a storage backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Outcome of a failed tracker operation.
///
/// The `Display` text of each variant is the message sent to the client.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("User creation failed!")]
    UserCreationFailed(#[source] StoreError),

    #[error("User listing failed!")]
    UserListingFailed(#[source] StoreError),

    #[error("User not found in the database!")]
    UserNotFound(String),

    /// Malformed id, failed lookup, or unknown user on the log route
    #[error("There are no users with that ID in the database!")]
    UnknownUserId(String),

    #[error("Exercise creation failed!")]
    MissingDescription,

    #[error("Exercise creation failed!")]
    InvalidDuration(String),

    #[error("Exercise creation failed!")]
    ExerciseCreationFailed(#[source] StoreError),

    #[error("Exercise log retrieval failed!")]
    LogQueryFailed(#[source] StoreError),
}

impl TrackerError {
    /// Client-facing message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
