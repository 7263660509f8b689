//! Current mood and mood history on top of a key-value store.

use chrono::{DateTime, SecondsFormat, Utc};
use moodboard_core::{Mood, MoodEvent};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Key holding the current mood string.
pub const MOOD_KEY: &str = "mood";

/// Key holding the JSON array of [`MoodEvent`]s.
pub const HISTORY_KEY: &str = "moodHistory";

/// ISO-8601 UTC timestamp with millisecond precision, e.g. `2026-01-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The persisted mood state and its backing store.
#[derive(Debug)]
pub struct MoodStore<S> {
    store: S,
    mood: Mood,
    history: Vec<MoodEvent>,
}

impl<S: KeyValueStore> MoodStore<S> {
    /// Load saved state, falling back to `happy` and an empty history.
    pub fn load(store: S) -> Self {
        let mood = match store.get(MOOD_KEY) {
            Ok(Some(saved)) => saved.parse::<Mood>().unwrap_or_else(|err| {
                warn!(%err, "ignoring saved mood");
                Mood::default()
            }),
            Ok(None) => Mood::default(),
            Err(err) => {
                warn!(%err, "could not read saved mood");
                Mood::default()
            }
        };

        let history = match store.get(HISTORY_KEY) {
            Ok(Some(json)) => {
                serde_json::from_str::<Vec<MoodEvent>>(&json).unwrap_or_else(|err| {
                    warn!(%err, "discarding malformed mood history");
                    Vec::new()
                })
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "could not read mood history");
                Vec::new()
            }
        };

        debug!(%mood, events = history.len(), "loaded mood state");
        Self {
            store,
            mood,
            history,
        }
    }

    /// The current mood.
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// All recorded mood changes, oldest first.
    pub fn history(&self) -> &[MoodEvent] {
        &self.history
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Record a mood change timestamped now.
    pub fn select(&mut self, mood: Mood) -> Result<(), StoreError> {
        self.select_at(mood, Utc::now())
    }

    /// Record a mood change at `at`.
    ///
    /// The in-memory mood and history are updated first, so they reflect the
    /// selection even when writing to the store fails. The whole history is
    /// rewritten before the current mood value.
    pub fn select_at(&mut self, mood: Mood, at: DateTime<Utc>) -> Result<(), StoreError> {
        self.mood = mood;
        self.history.push(MoodEvent::new(mood, iso_timestamp(at)));

        let json = serde_json::to_string(&self.history)?;
        self.store.set(HISTORY_KEY, &json)?;
        self.store.set(MOOD_KEY, mood.as_str())?;
        debug!(%mood, events = self.history.len(), "saved mood");
        Ok(())
    }
}
