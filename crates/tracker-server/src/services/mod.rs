//! Business logic services

pub mod exercises;
pub mod logs;
pub mod users;

pub use exercises::ExerciseService;
pub use logs::LogService;
pub use users::UserService;

use tracker_core::{input, TrackerError, User, UserStore};

/// Look up a user by a client-supplied id.
///
/// Malformed ids and storage failures both surface as
/// [`TrackerError::UnknownUserId`]; a well-formed id with no record is
/// `Ok(None)`.
async fn lookup_user(store: &dyn UserStore, id: &str) -> Result<Option<User>, TrackerError> {
    if !input::is_well_formed_id(id) {
        tracing::debug!("Rejecting malformed user id: {}", id);
        return Err(TrackerError::UnknownUserId(id.to_string()));
    }

    store.get_user(id).await.map_err(|e| {
        tracing::error!("User lookup failed for {}: {}", id, e);
        TrackerError::UnknownUserId(id.to_string())
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use tracker_core::{
        Exercise, ExerciseQuery, ExerciseStore, NewExercise, NewUser, StoreError, StoreResult,
        User, UserStore,
    };

    /// Store whose every operation fails
    pub struct BrokenStore;

    fn broken<T>() -> StoreResult<T> {
        Err(StoreError::Database("connection refused".to_string()))
    }

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn create_user(&self, _user: &NewUser) -> StoreResult<User> {
            broken()
        }
        async fn get_user(&self, _id: &str) -> StoreResult<Option<User>> {
            broken()
        }
        async fn list_users(&self) -> StoreResult<Vec<User>> {
            broken()
        }
    }

    #[async_trait]
    impl ExerciseStore for BrokenStore {
        async fn create_exercise(&self, _exercise: &NewExercise) -> StoreResult<Exercise> {
            broken()
        }
        async fn get_exercise(&self, _id: &str) -> StoreResult<Option<Exercise>> {
            broken()
        }
        async fn find_exercises(&self, _query: &ExerciseQuery) -> StoreResult<Vec<Exercise>> {
            broken()
        }
    }
}
