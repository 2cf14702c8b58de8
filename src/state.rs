use std::sync::Arc;

use sqlx::SqlitePool;

use crate::sinks::SinkPaths;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    pub sinks: SinkPaths,
}
