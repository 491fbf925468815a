use anyhow::{Context, Result};
use std::time::Duration;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

#[cfg(feature = "slowdown")]
use super::slowdown_request;
use super::state::{CatalogPhase, GuardedCatalog, GuardedVideoSearch, ServerState};
use super::{http_cache, log_requests, make_songs_routes, make_video_search_routes, ServerConfig};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub status: CatalogPhase,
    pub song_count: usize,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let (status, song_count) = {
        let catalog = state.catalog.read().unwrap();
        (catalog.phase(), catalog.song_count())
    };
    Json(ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        status,
        song_count,
    })
}

pub fn make_app(
    config: ServerConfig,
    catalog: GuardedCatalog,
    video_search: GuardedVideoSearch,
) -> Router {
    let state = ServerState::new(config.clone(), catalog, video_search);

    let songs_routes: Router = make_songs_routes(state.clone()).layer(
        middleware::from_fn_with_state(config.content_cache_age_sec, http_cache),
    );

    let mut app: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone())
        .nest("/v1/songs", songs_routes)
        .merge(make_video_search_routes(state.clone()));

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app.layer(middleware::from_fn_with_state(state.clone(), log_requests));

    app
}

pub async fn run_server(
    config: ServerConfig,
    catalog: GuardedCatalog,
    video_search: GuardedVideoSearch,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, catalog, video_search);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    info!("Listening on port {}", port);

    Ok(axum::serve(listener, app).await?)
}
