//! Exercise Tracker Server
//!
//! HTTP service for creating users, logging exercises against them and
//! reading back a filtered, date-sorted activity log.
//!
//! Storage is either in-memory (DashMap) or embedded SQLite.

mod config;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::ServerConfig;
use services::{ExerciseService, LogService, UserService};
use storage::Stores;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub exercises: Arc<ExerciseService>,
    pub logs: Arc<LogService>,
}

impl AppState {
    pub fn new(stores: Stores) -> Self {
        Self {
            users: Arc::new(UserService::new(stores.users.clone())),
            exercises: Arc::new(ExerciseService::new(
                stores.users.clone(),
                stores.exercises.clone(),
            )),
            logs: Arc::new(LogService::new(stores.users, stores.exercises)),
        }
    }
}

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Exercise Tracker v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, storage={:?}",
        config.bind_address(),
        config.storage
    );

    let stores = storage::open(&config)
        .await
        .context("Failed to open storage")?;

    let app = build_router(AppState::new(stores), &config);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Your app is listening on port {}", listener.local_addr()?.port());
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route_service("/", ServeFile::new(config.index_path()))
        .nest("/api", api_routes())
        // Static assets
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::users::list).post(handlers::users::create),
        )
        .route("/users/:id/exercises", post(handlers::exercises::create))
        .route("/users/:id/logs", get(handlers::logs::show))
        .route("/users/:id/log", get(handlers::logs::show))
}
