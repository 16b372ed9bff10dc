// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::source::MetricsSource;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) source: Arc<dyn MetricsSource>,
    pub(crate) config: AppConfig,
}

pub fn app(source: Arc<dyn MetricsSource>, config: AppConfig) -> Router {
    let state = AppState { source, config };
    Router::new()
        .route("/", get(|| async { "hoststat: read-only host snapshot" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/host", get(http::host_handler)) // GET /api/host
        .route("/api/cpu", get(http::cpu_handler)) // GET /api/cpu
        .route("/api/disk", get(http::disk_list_handler)) // GET /api/disk
        .route("/api/disk/{id}", get(http::disk_view_handler)) // GET /api/disk/{id}
        .route("/api/memory", get(http::memory_handler)) // GET /api/memory
        .route("/api/load", get(http::load_handler)) // GET /api/load
        .route("/api/users", get(http::users_handler)) // GET /api/users
        .route("/api/network", get(http::network_handler)) // GET /api/network
        .route("/api/software", get(http::software_handler)) // GET /api/software
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
