//! `/api/video-search`: proxy to the video search backend for browsers.

use axum::{
    extract::{Query, State},
    http::{header::CONTENT_TYPE, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};

use super::errors::json_error;
use super::state::{GuardedVideoSearch, ServerState};
use crate::video::{placeholder_videos, VideoQuery, VideoSearchError};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct VideoSearchParams {
    song_title: Option<String>,
    song_difficulty: Option<String>,
}

async fn video_search(
    State(search): State<GuardedVideoSearch>,
    Query(params): Query<VideoSearchParams>,
) -> Response {
    let Some(song_title) = params.song_title.filter(|t| !t.trim().is_empty()) else {
        return json_error(StatusCode::BAD_REQUEST, "songTitle parameter is required");
    };
    let query = VideoQuery::new(&song_title, params.song_difficulty.as_deref());

    match search.search(&query).await {
        Ok(videos) => {
            info!(
                "Found {} videos for \"{}\"",
                videos.len(),
                query.search_terms()
            );
            Json(videos).into_response()
        }
        Err(VideoSearchError::NotConfigured) => {
            warn!("Video search not configured, returning placeholder data");
            Json(placeholder_videos(&query.song_title)).into_response()
        }
        Err(err) => {
            error!("Error searching videos: {}", err);
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to search YouTube videos",
            )
        }
    }
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> Response {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub fn make_video_search_routes(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route(
            "/api/video-search",
            get(video_search)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(cors)
        .with_state(state)
}
