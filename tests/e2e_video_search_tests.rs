//! End-to-end tests for chart video search
//!
//! Covers the browser-facing `/api/video-search` proxy and the cached
//! per-song lookup under `/v1/songs/{id}/videos`.

mod common;

use chart_catalog_server::pipeline::CatalogView;
use chart_catalog_server::server::state::{new_guarded_catalog, CatalogStatus};
use common::*;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;

async fn spawn_with_youtube(youtube: &FakeYouTube) -> TestServer {
    let catalog = new_guarded_catalog();
    *catalog.write().unwrap() =
        CatalogStatus::Loaded(Arc::new(CatalogView::new(create_test_songs())));
    TestServer::spawn_with(catalog, youtube_search_at(&youtube.base_url)).await
}

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array of videos")
        .iter()
        .map(|v| v["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_missing_title_is_bad_request() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.video_search(&[]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "songTitle parameter is required");

    let response = client.video_search(&[("songTitle", "   ")]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_search_returns_placeholders() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .video_search(&[("songTitle", "Lilly"), ("songDifficulty", "Past")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        titles(&body),
        vec!["Lilly - Chart View", "Lilly - Full Combo", "Lilly - Perfect Play"]
    );
    assert_eq!(body[0]["id"], "mock1");
    assert_eq!(body[0]["videoUrl"], "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
}

#[tokio::test]
async fn test_preflight_is_answered() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.video_search_with_method(Method::OPTIONS).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    for method in [Method::POST, Method::DELETE] {
        let response = client.video_search_with_method(method.clone()).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_configured_search_proxies_youtube() {
    let youtube = FakeYouTube::spawn().await;
    let server = spawn_with_youtube(&youtube).await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .video_search(&[("songTitle", "Grievous Lady"), ("songDifficulty", "Future")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["id"], "yt1");
    assert_eq!(body[0]["title"], "Grievous Lady Future chart view #1");
    assert_eq!(body[0]["channelTitle"], "Chart Channel");
    assert_eq!(body[0]["videoUrl"], "https://www.youtube.com/watch?v=yt1");
    assert_eq!(
        body[2]["thumbnailUrl"],
        "https://i.ytimg.com/vi/yt3/mqdefault.jpg"
    );

    let queries = youtube.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["q"], "Grievous Lady Future chart view");
    assert_eq!(queries[0]["maxResults"], "3");
    assert_eq!(queries[0]["type"], "video");
    assert_eq!(queries[0]["key"], "test-youtube-key");
}

#[tokio::test]
async fn test_search_without_difficulty() {
    let youtube = FakeYouTube::spawn().await;
    let server = spawn_with_youtube(&youtube).await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.video_search(&[("songTitle", "Lilly")]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(youtube.queries()[0]["q"], "Lilly chart view");
}

#[tokio::test]
async fn test_upstream_failure_is_server_error() {
    let youtube = FakeYouTube::spawn_with_status(StatusCode::FORBIDDEN).await;
    let server = spawn_with_youtube(&youtube).await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.video_search(&[("songTitle", "Lilly")]).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Failed to search YouTube videos");
}

#[tokio::test]
async fn test_song_videos_are_cached_per_title() {
    let youtube = FakeYouTube::spawn().await;
    let server = spawn_with_youtube(&youtube).await;
    let client = TestClient::new(server.base_url.clone());

    let first: Value = client
        .get_song_videos(GRIEVOUS_LADY_ID)
        .await
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get_song_videos(GRIEVOUS_LADY_ID)
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(titles(&first)[0], "Grievous Lady Future chart view #1");

    // The Present chart shares the title, so it reuses the cached results.
    let other_chart: Value = client.get_song_videos(111).await.json().await.unwrap();
    assert_eq!(other_chart, first);

    assert_eq!(youtube.queries().len(), 1);
}

#[tokio::test]
async fn test_song_videos_fall_back_to_placeholders() {
    let youtube = FakeYouTube::spawn_with_status(StatusCode::INTERNAL_SERVER_ERROR).await;
    let server = spawn_with_youtube(&youtube).await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.get_song_videos(LILLY_ID).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        titles(&body),
        vec!["Lilly - Chart View", "Lilly - Full Combo", "Lilly - Perfect Play"]
    );
}
