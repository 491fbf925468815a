use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_style;

use chart_catalog_server::cache::{FileStorage, SystemClock};
use chart_catalog_server::catalog::{Difficulty, Song};
use chart_catalog_server::pipeline::{
    CatalogBrowser, CatalogView, FilterCriteria, SortDirection, SortKey, DEFAULT_PAGE_SIZE,
};
use chart_catalog_server::server::state::NO_MATCHES_MESSAGE;
use chart_catalog_server::song_store::{SongStoreAccessor, SummaryCache, SupabaseSongSource};
use chart_catalog_server::video::{
    ChartVideoLookup, PreviewSelector, VideoSearch, VideoSearchEndpointClient, YouTubeSearch,
};
use cli_style::{colors, get_styles, hex_color, TableBuilder};

#[derive(Parser, Debug)]
#[command(styles=get_styles())]
struct CliArgs {
    /// Free text matched against title, artist, constant and level.
    #[clap(short, long, default_value = "")]
    pub query: String,

    /// Lowest difficulty constant to show.
    #[clap(long, default_value_t = 1.0)]
    pub min: f64,

    /// Highest difficulty constant to show.
    #[clap(long, default_value_t = 12.0)]
    pub max: f64,

    /// Only show these categories (repeatable). All categories when omitted.
    #[clap(short, long = "category")]
    pub categories: Vec<Difficulty>,

    #[clap(long, value_enum, default_value_t = SortKey::Constant)]
    pub sort: SortKey,

    #[clap(long, value_enum, default_value_t = SortDirection::Descending)]
    pub direction: SortDirection,

    /// 1-based page to print, clamped to the available pages.
    #[clap(long, default_value_t = 1)]
    pub page: usize,

    #[clap(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Look up chart videos for this row of the printed page (1-based).
    #[clap(long)]
    pub videos: Option<usize>,

    /// Ask a running server's video search endpoint instead of YouTube.
    #[clap(long)]
    pub api_url: Option<String>,

    /// Directory of the song summary snapshot.
    #[clap(long)]
    pub cache_dir: Option<PathBuf>,

    #[clap(long, default_value_t = 30)]
    pub request_timeout_sec: u64,

    #[clap(long, env = "SUPABASE_URL")]
    pub data_service_url: Option<String>,

    #[clap(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub data_service_key: Option<String>,

    #[clap(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,
}

async fn load_songs(args: &CliArgs) -> Result<Vec<Song>> {
    let summary_cache = match &args.cache_dir {
        Some(dir) => Some(SummaryCache::new(
            Arc::new(FileStorage::new(dir)?),
            Arc::new(SystemClock),
        )),
        None => None,
    };
    if let Some(songs) = summary_cache.as_ref().and_then(|cache| cache.load()) {
        info!("Using {} songs from summary cache", songs.len());
        return Ok(songs);
    }

    let source = SupabaseSongSource::from_credentials(
        args.data_service_url.as_deref(),
        args.data_service_key.as_deref(),
        args.request_timeout_sec,
    )?;
    let songs = SongStoreAccessor::new(Arc::new(source))
        .fetch_all_songs()
        .await
        .context("Failed to load songs. Please try again later.")?;
    if let Some(cache) = &summary_cache {
        cache.save(&songs);
    }
    Ok(songs)
}

fn make_video_search(args: &CliArgs) -> Result<Arc<dyn VideoSearch>> {
    Ok(match &args.api_url {
        Some(url) => Arc::new(VideoSearchEndpointClient::new(url, args.request_timeout_sec)?),
        None => Arc::new(YouTubeSearch::new(
            args.youtube_api_key.as_deref(),
            args.request_timeout_sec,
        )?),
    })
}

fn print_page(browser: &CatalogBrowser, view: &CatalogView) -> Vec<Song> {
    let page = browser.page(view);
    if page.songs.is_empty() {
        cli_style::print_empty_list(NO_MATCHES_MESSAGE);
        return page.songs;
    }

    let mut table = TableBuilder::new(vec!["#", "Title", "Artist", "Cat", "Const", "Lv"]);
    for (i, song) in page.songs.iter().enumerate() {
        let category_color = hex_color(song.difficulty.color());
        table.add_colored_row(vec![
            ((i + 1).to_string(), colors::DIM),
            (song.title.clone(), colors::WHITE),
            (song.artist.clone(), colors::WHITE),
            (song.difficulty.short_label().to_string(), category_color),
            (format!("{:.1}", song.constant), colors::CYAN),
            (song.level.clone(), colors::WHITE),
        ]);
    }
    table.print();
    cli_style::print_dim(&format!(
        "{} (page {} of {})",
        page.summary(),
        page.page,
        page.total_pages
    ));
    page.songs
}

async fn print_videos(args: &CliArgs, song: &Song) -> Result<()> {
    let lookup = ChartVideoLookup::new(make_video_search(args)?);
    let selector = PreviewSelector::new();
    let videos = selector
        .select(&lookup, &song.title, Some(song.difficulty.label()))
        .await
        .unwrap_or_default();

    println!();
    println!("Chart videos for {} [{}]", song.title, song.difficulty);
    for video in &videos {
        cli_style::print_list_item(
            &format!("{} ({}) {}", video.title, video.channel_title, video.video_url),
            1,
        );
    }
    if let Some(video) = selector.selected_video() {
        cli_style::print_dim(&format!("Play: {}", video.embed_url()));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let songs = match load_songs(&cli_args).await {
        Ok(songs) => songs,
        Err(err) => {
            cli_style::print_error(&format!("{:#}", err));
            std::process::exit(1);
        }
    };
    let view = CatalogView::new(songs);

    let mut browser = CatalogBrowser::new(FilterCriteria::default());
    browser.set_query(&cli_args.query);
    browser.set_range(cli_args.min, cli_args.max);
    browser.set_categories(cli_args.categories.iter().copied());
    browser.set_sort(cli_args.sort, cli_args.direction);
    browser.set_page_size(cli_args.page_size)?;
    let total_pages = browser.page(&view).total_pages;
    browser.go_to_page(cli_args.page, total_pages);
    if cli_args.page != browser.current_page() && total_pages > 0 {
        cli_style::print_warning(&format!(
            "Page {} does not exist, showing page {}",
            cli_args.page,
            browser.current_page()
        ));
    }

    let rows = print_page(&browser, &view);

    if let Some(row) = cli_args.videos {
        let Some(song) = row.checked_sub(1).and_then(|i| rows.get(i)) else {
            bail!("Row {} is not on the printed page", row);
        };
        print_videos(&cli_args, song).await?;
    }

    Ok(())
}
