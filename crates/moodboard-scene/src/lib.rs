//! Mood visualizations for moodboard.
//!
//! Each mood owns one collection of entities: bouncing particles (happy),
//! sine waves (sad), jittering lines (anxious) and a wrapping starfield with
//! trails (excited). The [`Animator`] renders only the active mood's
//! collection each frame; the others stay frozen until selected again.

mod animator;
mod entities;

pub use animator::{
    Animator, BACKGROUND_GRAY, SceneRegistry, STAR_LIMIT, STAR_SPAWN_INTERVAL,
};
pub use entities::{
    ANXIOUS_LINE_COUNT, AnxiousLine, Entity, PARTICLE_COUNT, Particle, STAR_COUNT, Star,
    TRAIL_LENGTH, WAVE_COUNT, Wave,
};
