use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Color used for labels that are not one of the known categories.
pub const NEUTRAL_COLOR: &str = "#64748b";

/// Difficulty category of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Past,
    Present,
    Future,
    Eternal,
    Beyond,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Past,
        Difficulty::Present,
        Difficulty::Future,
        Difficulty::Eternal,
        Difficulty::Beyond,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Past => "Past",
            Difficulty::Present => "Present",
            Difficulty::Future => "Future",
            Difficulty::Eternal => "Eternal",
            Difficulty::Beyond => "Beyond",
        }
    }

    /// Three letter abbreviation shown on filter toggles.
    pub fn short_label(&self) -> &'static str {
        match self {
            Difficulty::Past => "PST",
            Difficulty::Present => "PRS",
            Difficulty::Future => "FTR",
            Difficulty::Eternal => "ETR",
            Difficulty::Beyond => "BYD",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Past => "#4caed1",
            Difficulty::Present => "#8fad4c",
            Difficulty::Future => "#822c68",
            Difficulty::Eternal => "#8571a3",
            Difficulty::Beyond => "#b5112e",
        }
    }
}

/// Display color for a raw category label, neutral when the label is unknown.
pub fn label_color(label: &str) -> &'static str {
    label
        .parse::<Difficulty>()
        .map(|d| d.color())
        .unwrap_or(NEUTRAL_COLOR)
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts both full labels and abbreviations, case-insensitively.
impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| {
                d.label().eq_ignore_ascii_case(trimmed)
                    || d.short_label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}
