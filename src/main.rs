use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chart_catalog_server::cache::{FileStorage, SystemClock};
use chart_catalog_server::config::{AppConfig, CliConfig, FileConfig};
use chart_catalog_server::server::{
    load_catalog, mark_failed, run_server, state::new_guarded_catalog, RequestsLoggingLevel,
    ServerConfig,
};
use chart_catalog_server::song_store::{
    SongStoreAccessor, SummaryCache, SupabaseSongSource, STORAGE_BUCKET,
};
use chart_catalog_server::video::YouTubeSearch;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the command line.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 3001)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// The maximum age of catalog responses in client caches, in seconds.
    #[clap(long, default_value_t = 3600)]
    pub content_cache_age_sec: usize,

    /// Directory for the song summary snapshot. No snapshot is kept when unset.
    #[clap(long)]
    pub cache_dir: Option<PathBuf>,

    /// Timeout in seconds for requests to the data service and video search.
    #[clap(long, default_value_t = 30)]
    pub request_timeout_sec: u64,

    /// Base URL of the hosted data service.
    #[clap(long, env = "SUPABASE_URL")]
    pub data_service_url: Option<String>,

    /// Anonymous API key of the hosted data service.
    #[clap(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub data_service_key: Option<String>,

    /// YouTube Data API key. Video search returns placeholders without it.
    #[clap(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,
}

impl From<&CliArgs> for CliConfig {
    fn from(args: &CliArgs) -> Self {
        CliConfig {
            port: args.port,
            logging_level: args.logging_level.clone(),
            content_cache_age_sec: args.content_cache_age_sec,
            cache_dir: args.cache_dir.clone(),
            request_timeout_sec: args.request_timeout_sec,
            data_service_url: args.data_service_url.clone(),
            data_service_key: args.data_service_key.clone(),
            youtube_api_key: args.youtube_api_key.clone(),
        }
    }
}

fn make_summary_cache(config: &AppConfig) -> Result<Option<Arc<SummaryCache>>> {
    let Some(dir) = &config.cache_dir else {
        return Ok(None);
    };
    let storage = FileStorage::new(dir)
        .with_context(|| format!("Failed to open cache directory {:?}", dir))?;
    info!("Keeping song summary snapshot in {:?}", dir);
    Ok(Some(Arc::new(SummaryCache::new(
        Arc::new(storage),
        Arc::new(SystemClock),
    ))))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading config file {:?}", path);
            Some(FileConfig::load(path)?)
        }
        None => None,
    };
    let config = AppConfig::resolve(&CliConfig::from(&cli_args), file_config)?;

    let catalog = new_guarded_catalog();
    let summary_cache = make_summary_cache(&config)?;

    match SupabaseSongSource::from_credentials(
        config.data_service_url.as_deref(),
        config.data_service_key.as_deref(),
        config.request_timeout_sec,
    ) {
        Ok(source) => {
            info!("Loading songs from {}", source.base_url());
            let accessor = SongStoreAccessor::new(Arc::new(source))
                .with_page_size(config.catalog.fetch_page_size);
            tokio::spawn(load_catalog(catalog.clone(), accessor, summary_cache));
        }
        Err(err) => {
            error!("Cannot load songs: {}", err);
            mark_failed(&catalog, &err.to_string());
        }
    }

    let video_search = Arc::new(YouTubeSearch::new(
        config.youtube_api_key.as_deref(),
        config.request_timeout_sec,
    )?);

    info!(
        "Serving covers from bucket {} of {:?}",
        STORAGE_BUCKET, config.data_service_url
    );
    let server_config = ServerConfig {
        requests_logging_level: config.logging_level.clone(),
        port: config.port,
        content_cache_age_sec: config.content_cache_age_sec,
        default_page_size: config.catalog.default_page_size,
        storage_base_url: config.data_service_url.clone(),
    };

    info!("Ready to serve at port {}!", config.port);
    run_server(server_config, catalog, video_search).await
}
