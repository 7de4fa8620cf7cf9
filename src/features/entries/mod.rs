pub mod model;

use crate::domain::EntryMetadata;
use crate::parser::markdown::{compile_markdown_to_html, resolve_entry_link};
use crate::services::listing::{CategoryFilter, ListingState};
use crate::services::loader::EntryError;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use model::{JsonEntry, ListQuery};

pub fn entries_router() -> Router<AppState> {
    Router::new()
        .route("/entries", get(list_entries_handler))
        .route("/entries/{slug}", get(get_entry_handler))
}

async fn list_entries_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntryMetadata>>, StatusCode> {
    let filter = match query.category.as_deref() {
        None => CategoryFilter::All,
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(|_| StatusCode::BAD_REQUEST)?,
    };

    match state.loader.listing(&filter).await {
        ListingState::Ready(entries) => Ok(Json(entries)),
        ListingState::Empty => Ok(Json(Vec::new())),
        ListingState::Failed(_) | ListingState::Loading => Err(StatusCode::SERVICE_UNAVAILABLE),
    }
}

async fn get_entry_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<JsonEntry>, StatusCode> {
    let entry = match state.loader.load_entry_by_slug(&slug).await {
        Ok(entry) => entry,
        Err(EntryError::NotFound(_)) => return Err(StatusCode::NOT_FOUND),
        Err(EntryError::FetchFailed { .. }) => return Err(StatusCode::BAD_GATEWAY),
        Err(EntryError::IndexUnavailable(_)) => return Err(StatusCode::SERVICE_UNAVAILABLE),
    };

    // the index is loaded by now, links to sibling entries resolve against it
    let html_content = match state.loader.cached_index() {
        Some(index) => compile_markdown_to_html(&entry.content, |link| {
            resolve_entry_link(link, index, &state.config.base_path)
        }),
        None => compile_markdown_to_html(&entry.content, |link| link.to_string()),
    };

    Ok(Json(JsonEntry::new(entry, html_content)))
}
