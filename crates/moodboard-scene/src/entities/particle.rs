//! Bouncing pastel particles (happy mood).

use moodboard_core::{Bounds, RandomSource, Rgba, Surface, Vector2};

use super::Entity;

/// Number of particles in the happy scene.
pub const PARTICLE_COUNT: usize = 50;

/// A filled circle drifting at constant speed and bouncing off the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Diameter in canvas units.
    pub size: f32,
    pub color: Rgba,
}

impl Particle {
    /// Create a particle at a random position with a random pastel colour.
    pub fn spawn(bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let position = bounds.random_point(rng);
        let velocity = Vector2::new(rng.uniform(-2.0, 2.0), rng.uniform(-2.0, 2.0));
        let size = rng.uniform(10.0, 30.0);
        let r = rng.uniform(200.0, 255.0);
        let g = rng.uniform(200.0, 255.0);
        let b = rng.uniform(100.0, 200.0);
        Self {
            position,
            velocity,
            size,
            color: Rgba::rgb(r.round() as u8, g.round() as u8, b.round() as u8),
        }
    }
}

/// Negate `velocity` when `position` lies outside `[0, max]` and is still
/// heading further out. The position itself is never clamped.
fn reflect(position: f32, velocity: &mut f32, max: f32) {
    if (position < 0.0 && *velocity < 0.0) || (position > max && *velocity > 0.0) {
        *velocity = -*velocity;
    }
}

impl Entity for Particle {
    fn update(&mut self, bounds: Bounds, _rng: &mut dyn RandomSource) {
        self.position += self.velocity;
        reflect(self.position.x, &mut self.velocity.x, bounds.width);
        reflect(self.position.y, &mut self.velocity.y, bounds.height);
    }

    fn display(&mut self, surface: &mut dyn Surface, _rng: &mut dyn RandomSource) {
        surface.fill_circle(self.position, self.size, self.color);
    }
}
