use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PlaybackError {
    #[error("No video is open")]
    NotOpen,

    #[error("Invalid playback rate: {0}")]
    InvalidRate(f64),

    #[error("Player rejected command: {0}")]
    Rejected(String),
}

/// What a player must support for the overlay to drive it.
pub trait PlayerControl: Send {
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self) -> Result<(), PlaybackError>;
    fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError>;
    fn set_rate(&mut self, rate: f64) -> Result<(), PlaybackError>;
}

/// Destination of serialized player commands, e.g. a frame's message channel.
pub trait CommandSink: Send {
    fn post(&mut self, message: String) -> Result<(), PlaybackError>;
}

impl CommandSink for Vec<String> {
    fn post(&mut self, message: String) -> Result<(), PlaybackError> {
        self.push(message);
        Ok(())
    }
}

/// Translates [`PlayerControl`] calls into the embedded player's JSON
/// command messages.
pub struct EmbedCommandAdapter<S: CommandSink> {
    sink: S,
}

impl<S: CommandSink> EmbedCommandAdapter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn command(&mut self, func: &str, args: serde_json::Value) -> Result<(), PlaybackError> {
        let message = json!({
            "event": "command",
            "func": func,
            "args": args,
        });
        self.sink.post(message.to_string())
    }
}

impl<S: CommandSink> PlayerControl for EmbedCommandAdapter<S> {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.command("playVideo", json!([]))
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.command("pauseVideo", json!([]))
    }

    fn seek_to(&mut self, seconds: f64) -> Result<(), PlaybackError> {
        self.command("seekTo", json!([seconds, true]))
    }

    fn set_rate(&mut self, rate: f64) -> Result<(), PlaybackError> {
        self.command("setPlaybackRate", json!([rate]))
    }
}
