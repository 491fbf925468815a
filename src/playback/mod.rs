//! Control surface of the embedded chart-video player.

mod control;
mod overlay;

pub use control::{CommandSink, EmbedCommandAdapter, PlaybackError, PlayerControl};
pub use overlay::{
    PlaybackState, VideoOverlay, MAX_PLAYBACK_RATE, MIN_PLAYBACK_RATE, RATE_STEP, SEEK_STEP_SEC,
};
