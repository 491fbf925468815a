mod catalog_loader;
pub mod config;
mod errors;
mod http_layers;
pub mod server;
mod songs;
pub mod state;
mod video_search;

pub use catalog_loader::{load_catalog, mark_failed};
pub use config::ServerConfig;
pub use http_layers::*;
pub(self) use songs::make_songs_routes;
pub(self) use video_search::make_video_search_routes;
#[allow(unused_imports)] // Used by main.rs
pub use server::{make_app, run_server};
pub use state::{CatalogStatus, GuardedCatalog, ServerState};
