//! Mood values and mood-change history records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The mood that drives which visualization is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Anxious,
    Excited,
}

/// Returned when a string does not name one of the four moods.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood: {0:?}")]
pub struct UnknownMood(pub String);

impl Mood {
    /// All moods in selector order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Anxious, Mood::Excited];

    /// The literal string persisted for this mood.
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Anxious => "anxious",
            Mood::Excited => "excited",
        }
    }

    /// Position of this mood in [`Mood::ALL`].
    pub fn index(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Sad => 1,
            Mood::Anxious => 2,
            Mood::Excited => 3,
        }
    }

    /// Cycle to the next mood.
    pub fn next(self) -> Self {
        match self {
            Mood::Happy => Mood::Sad,
            Mood::Sad => Mood::Anxious,
            Mood::Anxious => Mood::Excited,
            Mood::Excited => Mood::Happy,
        }
    }

    /// Cycle to the previous mood.
    pub fn previous(self) -> Self {
        match self {
            Mood::Happy => Mood::Excited,
            Mood::Sad => Mood::Happy,
            Mood::Anxious => Mood::Sad,
            Mood::Excited => Mood::Anxious,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

/// A single entry in the mood history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEvent {
    /// The mood that was selected.
    pub mood: Mood,
    /// ISO-8601 timestamp of the selection.
    pub timestamp: String,
}

impl MoodEvent {
    /// Create a new history entry.
    pub fn new(mood: Mood, timestamp: impl Into<String>) -> Self {
        Self {
            mood,
            timestamp: timestamp.into(),
        }
    }
}
