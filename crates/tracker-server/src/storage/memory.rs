//! In-memory store using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracker_core::{
    Exercise, ExerciseQuery, ExerciseStore, NewExercise, NewUser, StoreResult, User, UserStore,
};

/// Ephemeral store for both collections.
///
/// Each record carries an insertion sequence number so listings come back in
/// insertion order and equal dates sort stably.
pub struct MemoryStore {
    users: DashMap<String, Entry<User>>,
    exercises: DashMap<String, Entry<Exercise>>,
    sequence: AtomicU64,
}

struct Entry<T> {
    seq: u64,
    record: T,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            exercises: DashMap::new(),
            sequence: AtomicU64::new(0),
        }
    }

    fn next_seq(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &NewUser) -> StoreResult<User> {
        let record = User {
            id: Self::new_id(),
            username: user.username.clone(),
        };
        self.users.insert(
            record.id.clone(),
            Entry {
                seq: self.next_seq(),
                record: record.clone(),
            },
        );
        Ok(record)
    }

    async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.get(id).map(|entry| entry.record.clone()))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let mut entries: Vec<(u64, User)> = self
            .users
            .iter()
            .map(|entry| (entry.seq, entry.record.clone()))
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);

        Ok(entries.into_iter().map(|(_, user)| user).collect())
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn create_exercise(&self, exercise: &NewExercise) -> StoreResult<Exercise> {
        let record = Exercise {
            id: Self::new_id(),
            user_id: exercise.user_id.clone(),
            username: exercise.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        };
        self.exercises.insert(
            record.id.clone(),
            Entry {
                seq: self.next_seq(),
                record: record.clone(),
            },
        );
        Ok(record)
    }

    async fn get_exercise(&self, id: &str) -> StoreResult<Option<Exercise>> {
        Ok(self.exercises.get(id).map(|entry| entry.record.clone()))
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<Exercise>> {
        let mut matched: Vec<(u64, Exercise)> = self
            .exercises
            .iter()
            .filter(|entry| query.matches(&entry.record))
            .map(|entry| (entry.seq, entry.record.clone()))
            .collect();
        matched.sort_by_key(|(seq, _)| *seq);

        let mut exercises: Vec<Exercise> = matched.into_iter().map(|(_, e)| e).collect();
        query.sort.apply(&mut exercises);
        if let Some(limit) = query.limit {
            exercises.truncate(limit);
        }

        Ok(exercises)
    }
}
