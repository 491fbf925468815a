use std::sync::Arc;
use tracing::{error, info, warn};

use super::state::{CatalogStatus, GuardedCatalog};
use crate::pipeline::CatalogView;
use crate::song_store::{SongStoreAccessor, SummaryCache};

fn set_loaded(catalog: &GuardedCatalog, view: CatalogView) {
    *catalog.write().unwrap() = CatalogStatus::Loaded(Arc::new(view));
}

/// Marks the catalog as failed unless a snapshot is already being served.
pub fn mark_failed(catalog: &GuardedCatalog, reason: &str) {
    let mut status = catalog.write().unwrap();
    if let CatalogStatus::Loaded(view) = &*status {
        warn!(
            "Keeping {} cached songs after load failure: {}",
            view.len(),
            reason
        );
        return;
    }
    *status = CatalogStatus::Failed(reason.to_string());
}

/// Populates `catalog` from the data service.
///
/// A fresh summary snapshot, when there is one, is published first so
/// requests can be served while the full list is fetched. There is no retry:
/// a failed fetch leaves the catalog `Failed`, or on the snapshot if one was
/// published.
pub async fn load_catalog(
    catalog: GuardedCatalog,
    accessor: SongStoreAccessor,
    summary_cache: Option<Arc<SummaryCache>>,
) {
    if let Some(songs) = summary_cache.as_ref().and_then(|cache| cache.load()) {
        info!(
            "Serving {} songs from summary cache while refreshing",
            songs.len()
        );
        set_loaded(&catalog, CatalogView::new(songs));
    }

    match accessor.fetch_all_songs().await {
        Ok(songs) => {
            info!("Loaded {} songs from data service", songs.len());
            if let Some(cache) = &summary_cache {
                cache.save(&songs);
            }
            set_loaded(&catalog, CatalogView::new(songs));
        }
        Err(err) => {
            error!("Failed to load songs: {}", err);
            mark_failed(&catalog, &err.to_string());
        }
    }
}
