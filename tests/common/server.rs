//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own catalog state.

use super::constants::*;
use super::fixtures::create_test_songs;
use chart_catalog_server::pipeline::CatalogView;
use chart_catalog_server::server::state::{new_guarded_catalog, CatalogStatus, GuardedCatalog};
use chart_catalog_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use chart_catalog_server::video::{VideoSearch, YouTubeSearch};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    /// The catalog served, for tests that drive loading themselves
    pub catalog: GuardedCatalog,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a server with the fixture catalog loaded and video search
    /// left unconfigured.
    pub async fn spawn() -> Self {
        let catalog = new_guarded_catalog();
        *catalog.write().unwrap() =
            CatalogStatus::Loaded(Arc::new(CatalogView::new(create_test_songs())));
        Self::spawn_with(catalog, unconfigured_video_search()).await
    }

    /// Spawns a server around the given catalog state and video search backend.
    pub async fn spawn_with(catalog: GuardedCatalog, video_search: Arc<dyn VideoSearch>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 0, // Disable caching in tests
            default_page_size: 25,
            storage_base_url: Some("https://demo.supabase.co".to_string()),
        };
        let app = make_app(config, catalog.clone(), video_search);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            catalog,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling the home endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn unconfigured_video_search() -> Arc<dyn VideoSearch> {
    Arc::new(YouTubeSearch::new(None, REQUEST_TIMEOUT_SECS).expect("Failed to build video search"))
}

/// A YouTube backend with a key, talking to `base_url` instead of Google.
pub fn youtube_search_at(base_url: &str) -> Arc<dyn VideoSearch> {
    Arc::new(
        YouTubeSearch::new(Some("test-youtube-key"), REQUEST_TIMEOUT_SECS)
            .expect("Failed to build video search")
            .with_base_url(base_url),
    )
}
