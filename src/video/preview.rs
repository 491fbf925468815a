use std::sync::Mutex;

use super::{ChartVideoLookup, VideoResult};

/// Handed out by [`PreviewSelector::request`], identifies one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
    title: String,
}

impl PreviewTicket {
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Default)]
struct PreviewState {
    generation: u64,
    title: Option<String>,
    videos: Option<Vec<VideoResult>>,
}

/// Tracks which song's videos are being previewed.
///
/// Only the most recent request may store its results; a response arriving
/// for an older request is dropped.
#[derive(Default)]
pub struct PreviewSelector {
    state: Mutex<PreviewState>,
}

impl PreviewSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self, title: &str) -> PreviewTicket {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.title = Some(title.to_string());
        state.videos = None;
        PreviewTicket {
            generation: state.generation,
            title: title.to_string(),
        }
    }

    /// Returns false when the ticket has been superseded.
    pub fn resolve(&self, ticket: &PreviewTicket, videos: Vec<VideoResult>) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.generation != ticket.generation {
            return false;
        }
        state.videos = Some(videos);
        true
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        state.title = None;
        state.videos = None;
    }

    pub fn title(&self) -> Option<String> {
        self.state.lock().unwrap().title.clone()
    }

    pub fn videos(&self) -> Option<Vec<VideoResult>> {
        self.state.lock().unwrap().videos.clone()
    }

    /// The video to play: the first result of the current selection.
    pub fn selected_video(&self) -> Option<VideoResult> {
        self.state
            .lock()
            .unwrap()
            .videos
            .as_ref()
            .and_then(|videos| videos.first().cloned())
    }

    /// Runs the lookup for `title` and stores the result unless a newer
    /// request was made in the meantime.
    pub async fn select(
        &self,
        lookup: &ChartVideoLookup,
        title: &str,
        category: Option<&str>,
    ) -> Option<Vec<VideoResult>> {
        let ticket = self.request(title);
        let videos = lookup.find_chart_videos(title, category).await;
        if self.resolve(&ticket, videos.clone()) {
            Some(videos)
        } else {
            None
        }
    }
}
