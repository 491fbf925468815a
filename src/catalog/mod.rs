mod difficulty;
mod song;

pub use difficulty::{label_color, Difficulty, UnknownDifficulty, NEUTRAL_COLOR};
pub use song::Song;
