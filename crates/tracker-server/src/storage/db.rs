//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use std::str::FromStr;
use tracker_core::{
    Exercise, ExerciseQuery, ExerciseStore, NewExercise, NewUser, SortOrder, StoreError,
    StoreResult, User, UserStore,
};

/// `database_path` value selecting a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        if database_path == IN_MEMORY_PATH {
            tracing::info!("Opening in-memory SQLite database");
            return Self::in_memory().await;
        }

        tracing::info!("Opening SQLite database at: {}", database_path);

        // Create parent directory if needed
        if let Some(parent) = std::path::Path::new(database_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::with_pool(pool).await
    }

    /// Private in-memory database. A single connection keeps every query on
    /// the same memory database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Invalid in-memory SQLite URL")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .context("Failed to open in-memory SQLite database")?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self> {
        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");
        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // `seq` preserves insertion order for listings and date ties
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                username TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS exercises (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                user_id TEXT NOT NULL,
                username TEXT NOT NULL,
                description TEXT NOT NULL,
                duration INTEGER NOT NULL,
                date TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_exercises_user_date
            ON exercises (user_id, date)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

fn db_error(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

#[async_trait]
impl UserStore for Database {
    async fn create_user(&self, user: &NewUser) -> StoreResult<User> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO users (id, username)
            VALUES (?1, ?2)
            "#,
        )
        .bind(&id)
        .bind(&user.username)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(User {
            id,
            username: user.username.clone(),
        })
    }

    async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username FROM users WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username FROM users ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

#[async_trait]
impl ExerciseStore for Database {
    async fn create_exercise(&self, exercise: &NewExercise) -> StoreResult<Exercise> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO exercises (id, user_id, username, description, duration, date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id)
        .bind(&exercise.user_id)
        .bind(&exercise.username)
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(Exercise {
            id,
            user_id: exercise.user_id.clone(),
            username: exercise.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: exercise.date,
        })
    }

    async fn get_exercise(&self, id: &str) -> StoreResult<Option<Exercise>> {
        let row: Option<ExerciseRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, username, description, duration, date
            FROM exercises WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_exercises(&self, query: &ExerciseQuery) -> StoreResult<Vec<Exercise>> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, user_id, username, description, duration, date FROM exercises WHERE user_id = ",
        );
        builder.push_bind(query.user_id.clone());

        if let Some(from) = query.from {
            builder.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = query.to {
            builder.push(" AND date <= ").push_bind(to);
        }

        builder.push(match query.sort {
            SortOrder::Inserted => " ORDER BY seq ASC",
            SortOrder::DateDescending => " ORDER BY date DESC, seq ASC",
        });

        if let Some(limit) = query.limit {
            let limit = i64::try_from(limit).unwrap_or(i64::MAX);
            builder.push(" LIMIT ").push_bind(limit);
        }

        let rows: Vec<ExerciseRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    username: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            username: r.username,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ExerciseRow {
    id: String,
    user_id: String,
    username: String,
    description: String,
    duration: i64,
    date: NaiveDate,
}

impl From<ExerciseRow> for Exercise {
    fn from(r: ExerciseRow) -> Self {
        Exercise {
            id: r.id,
            user_id: r.user_id,
            username: r.username,
            description: r.description,
            duration: r.duration,
            date: r.date,
        }
    }
}
