//! Persistence for the current mood and the mood history.
//!
//! Values live in a string key-value store ([`KeyValueStore`]); the
//! [`MoodStore`] layers the mood semantics on top and never fails to load:
//! missing or unreadable state falls back to `happy` with an empty history.

mod error;
mod kv;
mod mood_store;

pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore, default_data_dir};
pub use mood_store::{HISTORY_KEY, MOOD_KEY, MoodStore, iso_timestamp};
