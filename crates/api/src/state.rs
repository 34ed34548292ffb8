use std::sync::Arc;

use skilledit_core::skills::SkillCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference counted and the rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Handlers acquire one connection per request.
    pub pool: skilledit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Skill catalog, loaded once at startup and never refreshed.
    pub catalog: Arc<SkillCatalog>,
}
