//! Catalog routes: filtered pages, single songs and their chart videos.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::errors::json_error;
use super::state::{
    CatalogStatus, GuardedCatalog, ServerState, LOADING_MESSAGE, LOAD_FAILED_MESSAGE,
    NO_MATCHES_MESSAGE,
};
use crate::catalog::{Difficulty, Song};
use crate::pipeline::{CatalogView, ConstantRange, FilterCriteria, SortDirection, SortKey};
use crate::song_store::resolve_image_url;

#[derive(Deserialize, Debug, Default)]
pub struct SongsQuery {
    pub query: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Comma separated category labels, e.g. `Past,Future`.
    pub categories: Option<String>,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SongResponse {
    #[serde(flatten)]
    song: Song,
    resolved_image_url: String,
    category_label: &'static str,
    category_color: &'static str,
}

#[derive(Serialize)]
struct SongsResponse {
    songs: Vec<SongResponse>,
    total_matching: usize,
    total_pages: usize,
    page: usize,
    page_size: usize,
    summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

fn to_song_response(song: Song, storage_base_url: Option<&str>) -> SongResponse {
    SongResponse {
        resolved_image_url: resolve_image_url(&song.image_url, storage_base_url),
        category_label: song.difficulty.short_label(),
        category_color: song.difficulty.color(),
        song,
    }
}

fn parse_categories(raw: &str) -> Result<BTreeSet<Difficulty>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| label.parse::<Difficulty>().map_err(|e| e.to_string()))
        .collect()
}

/// Builds the criteria for one request, with defaults for what it omits.
pub fn criteria_from_query(
    query: SongsQuery,
    default_page_size: usize,
) -> Result<FilterCriteria, String> {
    let defaults = FilterCriteria::default();

    let page_size = query.page_size.unwrap_or(default_page_size);
    if page_size == 0 {
        return Err("page_size must be greater than 0".to_string());
    }

    let min = query.min.unwrap_or(defaults.range.min);
    let max = query.max.unwrap_or(defaults.range.max);
    if !min.is_finite() || !max.is_finite() {
        return Err("min and max must be finite numbers".to_string());
    }

    let categories = match query.categories.as_deref() {
        Some(raw) => parse_categories(raw)?,
        None => BTreeSet::new(),
    };

    Ok(FilterCriteria {
        query: query.query.unwrap_or_default(),
        range: ConstantRange::new(min, max),
        categories,
        sort_key: query.sort.unwrap_or(defaults.sort_key),
        sort_direction: query.direction.unwrap_or(defaults.sort_direction),
        page: query.page.unwrap_or(1).max(1),
        page_size,
    })
}

fn loaded_view(catalog: &GuardedCatalog) -> Result<Arc<CatalogView>, Response> {
    match &*catalog.read().unwrap() {
        CatalogStatus::Loaded(view) => Ok(view.clone()),
        CatalogStatus::Loading => Err(json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            LOADING_MESSAGE,
        )),
        CatalogStatus::Failed(_) => Err(json_error(
            StatusCode::SERVICE_UNAVAILABLE,
            LOAD_FAILED_MESSAGE,
        )),
    }
}

async fn get_songs(State(state): State<ServerState>, Query(query): Query<SongsQuery>) -> Response {
    let view = match loaded_view(&state.catalog) {
        Ok(view) => view,
        Err(response) => return response,
    };
    let criteria = match criteria_from_query(query, state.config.default_page_size) {
        Ok(criteria) => criteria,
        Err(message) => return json_error(StatusCode::BAD_REQUEST, &message),
    };

    let page = view.query(&criteria);
    let summary = page.summary();
    let storage_base_url = state.config.storage_base_url.as_deref();
    Json(SongsResponse {
        message: (page.total_matching == 0).then_some(NO_MATCHES_MESSAGE),
        total_matching: page.total_matching,
        total_pages: page.total_pages,
        page: page.page,
        page_size: page.page_size,
        summary,
        songs: page
            .songs
            .into_iter()
            .map(|song| to_song_response(song, storage_base_url))
            .collect(),
    })
    .into_response()
}

async fn get_song(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    let view = match loaded_view(&state.catalog) {
        Ok(view) => view,
        Err(response) => return response,
    };
    match view.get_song(id) {
        Some(song) => Json(to_song_response(
            song.clone(),
            state.config.storage_base_url.as_deref(),
        ))
        .into_response(),
        None => json_error(StatusCode::NOT_FOUND, "Song not found"),
    }
}

async fn get_song_videos(State(state): State<ServerState>, Path(id): Path<i64>) -> Response {
    let song = match loaded_view(&state.catalog) {
        Ok(view) => view.get_song(id).cloned(),
        Err(response) => return response,
    };
    let Some(song) = song else {
        return json_error(StatusCode::NOT_FOUND, "Song not found");
    };

    let videos = state
        .video_lookup
        .find_chart_videos(&song.title, Some(song.difficulty.label()))
        .await;
    Json(videos).into_response()
}

pub fn make_songs_routes(state: ServerState) -> Router {
    Router::new()
        .route("/", get(get_songs))
        .route("/{id}", get(get_song))
        .route("/{id}/videos", get(get_song_videos))
        .with_state(state)
}
