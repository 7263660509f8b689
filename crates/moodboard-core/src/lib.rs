//! Core types for the moodboard mood visualizer.
//!
//! This crate holds the vocabulary shared by the scene, the store and the
//! terminal host: moods and their history records, the 2D vector used by
//! every entity, drawing styles, and the two seams that keep the animation
//! testable (the [`Surface`] drawing target and the [`RandomSource`]).

mod color;
mod mood;
mod random;
mod surface;
mod vector;

pub use color::{Rgba, Stroke};
pub use mood::{Mood, MoodEvent, UnknownMood};
pub use random::{RandomSource, SequenceRandom};
pub use surface::{Bounds, DrawCommand, Recorder, Surface};
pub use vector::Vector2;
