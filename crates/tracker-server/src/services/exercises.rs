//! Exercise service

use super::lookup_user;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracker_core::{
    calendar, input, ExerciseReceipt, ExerciseStore, NewExercise, Result, TrackerError,
    UserStore,
};

pub struct ExerciseService {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl ExerciseService {
    pub fn new(users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self { users, exercises }
    }

    /// Attach an exercise to an existing user.
    ///
    /// `duration` keeps its leading integer; a value without one is refused.
    /// A missing or unparseable `date` becomes today (UTC).
    pub async fn add_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: &str,
        date: Option<&str>,
    ) -> Result<ExerciseReceipt> {
        let user = lookup_user(self.users.as_ref(), user_id)
            .await?
            .ok_or_else(|| {
                warn!("Exercise for unknown user: {}", user_id);
                TrackerError::UserNotFound(user_id.to_string())
            })?;

        if description.is_empty() {
            warn!("Exercise without description for user {}", user_id);
            return Err(TrackerError::MissingDescription);
        }

        let duration = input::parse_duration(duration).ok_or_else(|| {
            warn!("Unparseable exercise duration {:?} for user {}", duration, user_id);
            TrackerError::InvalidDuration(duration.to_string())
        })?;
        let date = input::resolve_exercise_date(date, calendar::today());

        info!(
            "Adding exercise: user={}, duration={}, date={}",
            user.id, duration, date
        );

        let exercise = self
            .exercises
            .create_exercise(&NewExercise::for_user(
                &user,
                description.to_string(),
                duration,
                date,
            ))
            .await
            .map_err(|e| {
                error!("Failed to create exercise: {}", e);
                TrackerError::ExerciseCreationFailed(e)
            })?;

        Ok(exercise.into())
    }
}
