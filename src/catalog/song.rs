use super::Difficulty;
use serde::{Deserialize, Serialize};

/// A single chart as stored in the data service.
///
/// Field names on the wire follow the data service columns
/// (`id, imageUrl, title, artist, difficulty, constant, level, version`).
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub image_url: String,
    pub title: String,
    pub artist: String,
    pub difficulty: Difficulty,
    pub constant: f64,
    pub level: String,
    pub version: String,
}

impl Song {
    /// Text matched by the free-text query.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.artist, self.constant, self.level
        )
        .to_lowercase()
    }

    /// Title, difficulty and version identify a chart in practice, but nothing
    /// enforces it, so the list position is appended.
    pub fn render_key(&self, index: usize) -> String {
        format!(
            "{}-{}-{}-{}",
            self.title, self.difficulty, self.version, index
        )
    }
}
