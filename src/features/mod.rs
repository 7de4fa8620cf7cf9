pub mod entries;

use crate::AppState;
use axum::Router;
use tower_http::services::ServeDir;

// api routes under /api, raw entry files under <base_path>/entries for HTTP loaders
pub fn build_router(state: AppState) -> Router {
    let static_mount = format!("{}/entries", state.config.base_path);
    let entries_dir = state.config.entries_dir.clone();

    Router::new()
        .nest("/api", entries::entries_router())
        .nest_service(&static_mount, ServeDir::new(entries_dir))
        .with_state(state)
}
