//! Exercise log query service

use super::lookup_user;
use std::sync::Arc;
use tracing::{debug, error};
use tracker_core::input::LogRange;
use tracker_core::{
    calendar, ExerciseLog, ExerciseQuery, ExerciseStore, LogEntry, Result, SortOrder,
    TrackerError, UserStore,
};

pub struct LogService {
    users: Arc<dyn UserStore>,
    exercises: Arc<dyn ExerciseStore>,
}

impl LogService {
    pub fn new(users: Arc<dyn UserStore>, exercises: Arc<dyn ExerciseStore>) -> Self {
        Self { users, exercises }
    }

    /// A user's exercises within `[from, to]`, newest first, at most `limit`.
    ///
    /// Bounds are `YYYY-MM-DD`; an omitted or unreadable `from` is the epoch
    /// and `to` is today. A non-positive or non-numeric `limit` is ignored.
    pub async fn get_log(
        &self,
        user_id: &str,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<ExerciseLog> {
        let user = lookup_user(self.users.as_ref(), user_id)
            .await?
            .ok_or_else(|| TrackerError::UnknownUserId(user_id.to_string()))?;

        let range = LogRange::resolve(from, to, limit, calendar::today());
        debug!(
            "Fetching log: user={}, from={}, to={}, limit={:?}",
            user.id, range.from, range.to, range.limit
        );

        let query = ExerciseQuery::for_user(&user.id)
            .between(range.from, range.to)
            .limit(range.limit)
            .sort(SortOrder::DateDescending);

        let mut exercises = self.exercises.find_exercises(&query).await.map_err(|e| {
            error!("Failed to fetch exercises for {}: {}", user.id, e);
            TrackerError::LogQueryFailed(e)
        })?;

        // Backends may hand rows back in any order
        SortOrder::DateDescending.apply(&mut exercises);

        let log = exercises.into_iter().map(LogEntry::from).collect();
        Ok(ExerciseLog::new(user, log))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::BrokenStore;
    use crate::storage::{Database, MemoryStore};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tracker_core::{Exercise, NewExercise, NewUser, StoreResult, User};

    fn date(raw: &str) -> NaiveDate {
        calendar::parse(raw).unwrap()
    }

    async fn seed<S: UserStore + ExerciseStore>(store: &S, dates: &[&str]) -> User {
        let user = store.create_user(&NewUser::new("bob")).await.unwrap();
        for raw in dates {
            store
                .create_exercise(&NewExercise::for_user(
                    &user,
                    format!("on {}", raw),
                    30,
                    date(raw),
                ))
                .await
                .unwrap();
        }
        user
    }

    fn entry_dates(log: &ExerciseLog) -> Vec<NaiveDate> {
        log.log.iter().map(|e| e.date).collect()
    }

    #[tokio::test]
    async fn test_range_filter() {
        let store = Arc::new(MemoryStore::new());
        let user = seed(store.as_ref(), &["2023-01-01", "2023-01-10", "2023-01-20"]).await;
        let service = LogService::new(store.clone(), store);

        let log = service
            .get_log(&user.id, Some("2023-01-05"), Some("2023-01-15"), None)
            .await
            .unwrap();

        assert_eq!(entry_dates(&log), vec![date("2023-01-10")]);
        assert_eq!(log.count, 1);
        assert_eq!(log.username, "bob");
        assert_eq!(log.user_id, user.id);
    }

    #[tokio::test]
    async fn test_limit_keeps_most_recent() {
        let store = Arc::new(MemoryStore::new());
        let user = seed(store.as_ref(), &["2023-01-10", "2023-01-20", "2023-01-01"]).await;
        let service = LogService::new(store.clone(), store);

        let log = service
            .get_log(&user.id, None, None, Some("1"))
            .await
            .unwrap();

        assert_eq!(entry_dates(&log), vec![date("2023-01-20")]);
        assert_eq!(log.count, log.log.len());
    }

    #[tokio::test]
    async fn test_sorted_descending_regardless_of_insertion() {
        let store = Arc::new(MemoryStore::new());
        let user = seed(
            store.as_ref(),
            &["2023-03-01", "2022-12-31", "2023-06-15", "2023-01-01"],
        )
        .await;
        let service = LogService::new(store.clone(), store);

        let log = service.get_log(&user.id, None, None, None).await.unwrap();

        assert_eq!(
            entry_dates(&log),
            vec![
                date("2023-06-15"),
                date("2023-03-01"),
                date("2023-01-01"),
                date("2022-12-31"),
            ]
        );
        assert_eq!(log.count, 4);
    }

    #[tokio::test]
    async fn test_same_behaviour_on_sqlite() {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let user = seed(db.as_ref(), &["2023-01-01", "2023-01-10", "2023-01-20"]).await;
        let service = LogService::new(db.clone(), db);

        let ranged = service
            .get_log(&user.id, Some("2023-01-05"), Some("2023-01-15"), None)
            .await
            .unwrap();
        assert_eq!(entry_dates(&ranged), vec![date("2023-01-10")]);

        let limited = service
            .get_log(&user.id, None, None, Some("2"))
            .await
            .unwrap();
        assert_eq!(
            entry_dates(&limited),
            vec![date("2023-01-20"), date("2023-01-10")]
        );
    }

    #[tokio::test]
    async fn test_sqlite_orders_scrambled_dates_and_ties() {
        let db = Arc::new(Database::in_memory().await.unwrap());
        let user = db.create_user(&NewUser::new("bob")).await.unwrap();
        for (description, raw) in [
            ("swim", "2023-03-01"),
            ("row", "2022-12-31"),
            ("bike", "2023-06-15"),
            ("walk", "2023-03-01"),
            ("lift", "2023-01-01"),
        ] {
            db.create_exercise(&NewExercise::for_user(
                &user,
                description.to_string(),
                30,
                date(raw),
            ))
            .await
            .unwrap();
        }
        let service = LogService::new(db.clone(), db);

        let log = service.get_log(&user.id, None, None, None).await.unwrap();
        let descriptions: Vec<_> = log.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["bike", "swim", "walk", "lift", "row"]);
        assert_eq!(log.count, 5);

        let limited = service
            .get_log(&user.id, None, None, Some("2"))
            .await
            .unwrap();
        let descriptions: Vec<_> = limited.log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, vec!["bike", "swim"]);
    }

    #[tokio::test]
    async fn test_future_entries_are_outside_default_range() {
        let store = Arc::new(MemoryStore::new());
        let user = seed(store.as_ref(), &["2999-01-01", "2023-01-01"]).await;
        let service = LogService::new(store.clone(), store);

        let log = service.get_log(&user.id, None, None, None).await.unwrap();
        assert_eq!(entry_dates(&log), vec![date("2023-01-01")]);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_users() {
        let store = Arc::new(MemoryStore::new());
        let service = LogService::new(store.clone(), store);

        let missing = uuid::Uuid::new_v4().to_string();
        for id in [missing.as_str(), "garbage"] {
            let err = service.get_log(id, None, None, None).await.unwrap_err();
            assert_eq!(
                err.message(),
                "There are no users with that ID in the database!"
            );
        }
    }

    #[tokio::test]
    async fn test_query_failure() {
        let users = Arc::new(MemoryStore::new());
        let user = users.create_user(&NewUser::new("bob")).await.unwrap();
        let service = LogService::new(users, Arc::new(BrokenStore));

        let err = service.get_log(&user.id, None, None, None).await.unwrap_err();
        assert!(matches!(err, TrackerError::LogQueryFailed(_)));
    }

    /// Returns matches in insertion order, ignoring the requested sort
    struct UnorderedStore(MemoryStore);

    #[async_trait]
    impl ExerciseStore for UnorderedStore {
        async fn create_exercise(&self, exercise: &NewExercise) -> StoreResult<Exercise> {
            self.0.create_exercise(exercise).await
        }
        async fn get_exercise(&self, id: &str) -> StoreResult<Option<Exercise>> {
            self.0.get_exercise(id).await
        }
        async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<Exercise>> {
            let unsorted = query.clone().sort(SortOrder::Inserted);
            self.0.find_exercises(&unsorted).await
        }
    }

    #[tokio::test]
    async fn test_service_sorts_unordered_backend_output() {
        let inner = MemoryStore::new();
        let user = seed(&inner, &["2023-01-01", "2023-01-20", "2023-01-10"]).await;
        let service = LogService::new(
            Arc::new(UserOnly(user.clone())),
            Arc::new(UnorderedStore(inner)),
        );

        let log = service.get_log(&user.id, None, None, None).await.unwrap();
        assert_eq!(
            entry_dates(&log),
            vec![date("2023-01-20"), date("2023-01-10"), date("2023-01-01")]
        );
    }

    struct UserOnly(User);

    #[async_trait]
    impl UserStore for UserOnly {
        async fn create_user(&self, _user: &NewUser) -> StoreResult<User> {
            Ok(self.0.clone())
        }
        async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
            Ok((id == self.0.id).then(|| self.0.clone()))
        }
        async fn list_users(&self) -> StoreResult<Vec<User>> {
            Ok(vec![self.0.clone()])
        }
    }
}
