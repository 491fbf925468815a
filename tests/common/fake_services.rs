//! In-process stand-ins for the hosted data service and the YouTube API.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chart_catalog_server::catalog::Song;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use super::constants::*;

/// One request received by the fake data service.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRequest {
    pub offset: usize,
    pub limit: usize,
    pub order: String,
    pub counted: bool,
}

#[derive(Clone)]
struct DataServiceState {
    rows: Arc<Vec<Song>>,
    requests: Arc<Mutex<Vec<RangeRequest>>>,
    fail_at_offset: Option<usize>,
}

/// Serves `rows` the way PostgREST serves a table, with `offset`/`limit`
/// paging and `Prefer: count=exact` totals.
pub struct FakeDataService {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RangeRequest>>>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl FakeDataService {
    pub async fn spawn(rows: Vec<Song>) -> Self {
        Self::spawn_inner(rows, None).await
    }

    /// Like `spawn`, but any request starting at `offset` gets a 500.
    pub async fn spawn_failing_at(rows: Vec<Song>, offset: usize) -> Self {
        Self::spawn_inner(rows, Some(offset)).await
    }

    async fn spawn_inner(rows: Vec<Song>, fail_at_offset: Option<usize>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = DataServiceState {
            rows: Arc::new(rows),
            requests: requests.clone(),
            fail_at_offset,
        };
        let app = Router::new()
            .route("/rest/v1/songs", get(get_songs))
            .with_state(state);

        let (base_url, shutdown_tx) = serve(app).await;
        Self {
            base_url,
            requests,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn requests(&self) -> Vec<RangeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeDataService {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn get_songs(
    State(state): State<DataServiceState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let authorized = headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(FAKE_ANON_KEY)
        && headers.get("authorization").and_then(|v| v.to_str().ok())
            == Some(&format!("Bearer {}", FAKE_ANON_KEY)[..]);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "Invalid API key"})))
            .into_response();
    }

    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit: usize = params
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(usize::MAX);
    let counted = headers.get("prefer").and_then(|v| v.to_str().ok()) == Some("count=exact");
    state.requests.lock().unwrap().push(RangeRequest {
        offset,
        limit,
        order: params.get("order").cloned().unwrap_or_default(),
        counted,
    });

    if state.fail_at_offset == Some(offset) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response();
    }

    let page: Vec<Song> = state.rows.iter().skip(offset).take(limit).cloned().collect();
    let mut response = Json(&page).into_response();
    if counted {
        let range = if page.is_empty() {
            format!("*/{}", state.rows.len())
        } else {
            format!("{}-{}/{}", offset, offset + page.len() - 1, state.rows.len())
        };
        if let Ok(value) = HeaderValue::from_str(&range) {
            response.headers_mut().insert("content-range", value);
        }
    }
    response
}

/// Answers YouTube `search` calls with canned items, or with an error status.
pub struct FakeYouTube {
    pub base_url: String,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

#[derive(Clone)]
struct YouTubeState {
    status: StatusCode,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeYouTube {
    pub async fn spawn() -> Self {
        Self::spawn_with_status(StatusCode::OK).await
    }

    pub async fn spawn_with_status(status: StatusCode) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/search", get(youtube_search))
            .with_state(YouTubeState {
                status,
                queries: queries.clone(),
            });
        let (base_url, shutdown_tx) = serve(app).await;
        Self {
            base_url,
            queries,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }
}

impl Drop for FakeYouTube {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn youtube_search(
    State(state): State<YouTubeState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let q = params.get("q").cloned().unwrap_or_default();
    state.queries.lock().unwrap().push(params);
    if !state.status.is_success() {
        return (state.status, Json(json!({"error": {"code": state.status.as_u16()}})))
            .into_response();
    }

    let items: Vec<_> = (1..=3)
        .map(|i| {
            json!({
                "id": {"kind": "youtube#video", "videoId": format!("yt{}", i)},
                "snippet": {
                    "title": format!("{} #{}", q, i),
                    "channelTitle": "Chart Channel",
                    "thumbnails": {
                        "medium": {"url": format!("https://i.ytimg.com/vi/yt{}/mqdefault.jpg", i)}
                    }
                }
            })
        })
        .collect();
    Json(json!({ "items": items })).into_response()
}

async fn serve(app: Router) -> (String, tokio::sync::oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let port = listener
        .local_addr()
        .expect("Failed to get local address")
        .port();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .expect("Fake service failed");
    });

    (format!("http://127.0.0.1:{}", port), shutdown_tx)
}
