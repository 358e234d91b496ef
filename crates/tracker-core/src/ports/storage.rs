//! Storage traits for persistence

use crate::StoreResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracker_types::{Exercise, NewExercise, NewUser, User};

/// User collection
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a user; the store assigns the id
    async fn create_user(&self, user: &NewUser) -> StoreResult<User>;
    async fn get_user(&self, id: &str) -> StoreResult<Option<User>>;
    /// All users in insertion order
    async fn list_users(&self) -> StoreResult<Vec<User>>;
}

/// Exercise collection
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Persist an exercise; the store assigns the id
    async fn create_exercise(&self, exercise: &NewExercise) -> StoreResult<Exercise>;
    async fn get_exercise(&self, id: &str) -> StoreResult<Option<Exercise>>;
    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<Exercise>>;
}

/// Result ordering for [`ExerciseQuery`]. Equal dates keep insertion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Inserted,
    DateDescending,
}

impl SortOrder {
    /// Stable in-place sort of records already in insertion order
    pub fn apply(self, exercises: &mut [Exercise]) {
        match self {
            SortOrder::Inserted => {}
            SortOrder::DateDescending => exercises.sort_by(|a, b| b.date.cmp(&a.date)),
        }
    }
}

/// Filter over one user's exercises.
///
/// Date bounds are inclusive. The sort is applied before the limit, so a
/// limit keeps the first records in sort order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub user_id: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
    pub sort: SortOrder,
}

impl ExerciseQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            from: None,
            to: None,
            limit: None,
            sort: SortOrder::Inserted,
        }
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Whether a record passes the user and date filters
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.map_or(true, |from| exercise.date >= from)
            && self.to.map_or(true, |to| exercise.date <= to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, user_id: &str, date: &str) -> Exercise {
        Exercise {
            id: id.to_string(),
            user_id: user_id.to_string(),
            username: "bob".to_string(),
            description: "run".to_string(),
            duration: 10,
            date: tracker_types::calendar::parse(date).unwrap(),
        }
    }

    fn date(raw: &str) -> NaiveDate {
        tracker_types::calendar::parse(raw).unwrap()
    }

    #[test]
    fn test_matches_inclusive_bounds() {
        let query = ExerciseQuery::for_user("u1").between(date("2023-01-05"), date("2023-01-15"));

        assert!(query.matches(&exercise("a", "u1", "2023-01-05")));
        assert!(query.matches(&exercise("b", "u1", "2023-01-15")));
        assert!(!query.matches(&exercise("c", "u1", "2023-01-04")));
        assert!(!query.matches(&exercise("d", "u1", "2023-01-16")));
        assert!(!query.matches(&exercise("e", "u2", "2023-01-10")));
    }

    #[test]
    fn test_open_query_matches_every_date() {
        let query = ExerciseQuery::for_user("u1");
        assert!(query.matches(&exercise("a", "u1", "1970-01-01")));
        assert!(query.matches(&exercise("b", "u1", "2999-12-31")));
    }

    #[test]
    fn test_descending_sort_is_stable() {
        let mut records = vec![
            exercise("a", "u1", "2023-01-01"),
            exercise("b", "u1", "2023-01-20"),
            exercise("c", "u1", "2023-01-10"),
            exercise("d", "u1", "2023-01-20"),
        ];
        SortOrder::DateDescending.apply(&mut records);

        let ids: Vec<_> = records.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_inserted_order_is_untouched() {
        let mut records = vec![
            exercise("a", "u1", "2023-01-20"),
            exercise("b", "u1", "2023-01-01"),
        ];
        SortOrder::Inserted.apply(&mut records);
        assert_eq!(records[0].id, "a");
    }
}
