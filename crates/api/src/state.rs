use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::CatalogService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally and
/// the rest is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check).
    pub pool: cordel_db::DbPool,
    /// The catalog service, constructed once at process start.
    pub catalog: CatalogService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
