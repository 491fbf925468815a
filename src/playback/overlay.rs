use tracing::debug;

use super::{PlaybackError, PlayerControl};

pub const MIN_PLAYBACK_RATE: f64 = 0.25;
pub const MAX_PLAYBACK_RATE: f64 = 2.0;
pub const RATE_STEP: f64 = 0.25;
pub const SEEK_STEP_SEC: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub video_id: String,
    pub playing: bool,
    pub position_sec: f64,
    pub rate: f64,
    /// While locked, pointer input never reaches the player surface.
    pub locked: bool,
}

impl PlaybackState {
    fn new(video_id: &str) -> Self {
        Self {
            video_id: video_id.to_string(),
            playing: true,
            position_sec: 0.0,
            rate: 1.0,
            locked: true,
        }
    }
}

/// Full-screen player overlay. Opens locked and autoplaying.
pub struct VideoOverlay<P: PlayerControl> {
    player: P,
    state: Option<PlaybackState>,
}

impl<P: PlayerControl> VideoOverlay<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            state: None,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn state(&self) -> Option<&PlaybackState> {
        self.state.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Whether pointer input should be forwarded to the player surface.
    pub fn surface_interactive(&self) -> bool {
        self.state.as_ref().is_some_and(|s| !s.locked)
    }

    pub fn status_text(&self) -> &'static str {
        match &self.state {
            Some(state) if state.locked => "Video is locked",
            Some(_) => "Video is unlocked",
            None => "",
        }
    }

    fn state_mut(&mut self) -> Result<&mut PlaybackState, PlaybackError> {
        self.state.as_mut().ok_or(PlaybackError::NotOpen)
    }

    pub fn open(&mut self, video_id: &str) {
        debug!("Opening video overlay for {}", video_id);
        self.state = Some(PlaybackState::new(video_id));
    }

    pub fn close(&mut self) {
        if self.state.take().is_some() {
            debug!("Closed video overlay");
        }
    }

    pub fn lock(&mut self) -> Result<(), PlaybackError> {
        self.state_mut()?.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<(), PlaybackError> {
        self.state_mut()?.locked = false;
        Ok(())
    }

    pub fn toggle_lock(&mut self) -> Result<bool, PlaybackError> {
        let state = self.state_mut()?;
        state.locked = !state.locked;
        Ok(state.locked)
    }

    /// Returns whether the video is playing afterwards.
    pub fn toggle_play(&mut self) -> Result<bool, PlaybackError> {
        let playing = self.state_mut()?.playing;
        if playing {
            self.player.pause()?;
        } else {
            self.player.play()?;
        }
        let state = self.state_mut()?;
        state.playing = !playing;
        Ok(state.playing)
    }

    /// Seeks relative to the last known position, never before the start.
    pub fn seek_by(&mut self, offset_sec: f64) -> Result<f64, PlaybackError> {
        let target = (self.state_mut()?.position_sec + offset_sec).max(0.0);
        self.player.seek_to(target)?;
        self.state_mut()?.position_sec = target;
        Ok(target)
    }

    /// Records the position reported by the player.
    pub fn update_position(&mut self, position_sec: f64) -> Result<(), PlaybackError> {
        self.state_mut()?.position_sec = position_sec.max(0.0);
        Ok(())
    }

    /// Snaps to the nearest `RATE_STEP` within the supported range.
    pub fn set_rate(&mut self, rate: f64) -> Result<f64, PlaybackError> {
        self.state_mut()?;
        if !rate.is_finite() {
            return Err(PlaybackError::InvalidRate(rate));
        }
        let rate =
            ((rate / RATE_STEP).round() * RATE_STEP).clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE);
        self.player.set_rate(rate)?;
        self.state_mut()?.rate = rate;
        Ok(rate)
    }

    pub fn adjust_rate(&mut self, delta: f64) -> Result<f64, PlaybackError> {
        let current = self.state_mut()?.rate;
        self.set_rate(current + delta)
    }
}
