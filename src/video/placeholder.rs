use super::VideoResult;

pub const PLACEHOLDER_THUMBNAIL_URL: &str = "https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg";
pub const PLACEHOLDER_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

const PLACEHOLDERS: [(&str, &str, &str); 3] = [
    ("mock1", "Chart View", "Chart Player"),
    ("mock2", "Full Combo", "Pro Player"),
    ("mock3", "Perfect Play", "Master Player"),
];

/// The fixed results served when no real search can be made.
pub fn placeholder_videos(song_title: &str) -> Vec<VideoResult> {
    PLACEHOLDERS
        .iter()
        .map(|(id, suffix, channel)| VideoResult {
            id: id.to_string(),
            title: format!("{} - {}", song_title, suffix),
            channel_title: channel.to_string(),
            thumbnail_url: PLACEHOLDER_THUMBNAIL_URL.to_string(),
            video_url: PLACEHOLDER_VIDEO_URL.to_string(),
        })
        .collect()
}
