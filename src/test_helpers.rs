use std::sync::Arc;

use axum::Router;

use crate::{
    config::{AppConfig, DatabaseConfig},
    db::{connection, seed},
    routes::app,
    state::AppState,
};

/// Config backed by a private in-memory SQLite database.
///
/// The pool is pinned to a single connection: every SQLite memory connection
/// is a separate database.
pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_idle: 1,
            seed: false,
        },
        ..AppConfig::default()
    }
}

pub async fn test_state() -> Arc<AppState> {
    let cfg = test_config();
    let db = connection::connect(&cfg.database)
        .await
        .expect("connect to in-memory database");
    AppState::new(cfg, db)
}

/// State whose database holds the sample restaurants and pizzas (ids 1..=3).
pub async fn seeded_state() -> Arc<AppState> {
    let state = test_state().await;
    seed::seed_if_empty(&state.db)
        .await
        .expect("seed sample data");
    state
}

pub fn test_app(state: &Arc<AppState>) -> Router {
    app(Arc::clone(state))
}
