//! Per-mood entity types.

mod anxious;
mod particle;
mod star;
mod wave;

use moodboard_core::{Bounds, RandomSource, Surface};

pub use anxious::{ANXIOUS_LINE_COUNT, AnxiousLine};
pub use particle::{PARTICLE_COUNT, Particle};
pub use star::{STAR_COUNT, Star, TRAIL_LENGTH};
pub use wave::{WAVE_COUNT, Wave};

/// A single animated object.
///
/// The animator calls `update` then `display` once per frame, but only while
/// the entity's mood is active. Waves and anxious lines keep the default
/// no-op `update` and advance their phase inside `display`.
pub trait Entity {
    /// Advance state by one frame within `bounds`.
    fn update(&mut self, _bounds: Bounds, _rng: &mut dyn RandomSource) {}

    /// Draw onto the surface.
    fn display(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource);
}
