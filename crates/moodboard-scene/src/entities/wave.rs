//! Slow sine waves (sad mood).

use moodboard_core::{Bounds, RandomSource, Rgba, Stroke, Surface, Vector2};

use super::Entity;

/// Number of waves in the sad scene.
pub const WAVE_COUNT: usize = 5;

/// Horizontal distance between polyline samples.
const SAMPLE_STEP: f32 = 10.0;

const WAVE_STROKE: Stroke = Stroke::new(Rgba::rgb(100, 150, 255), 1.0);

/// A horizontal sine wave centred on the canvas.
///
/// The phase advances by one unit each time the wave is displayed, so it
/// only moves while the sad scene is on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    pub phase_offset: f32,
    pub amplitude: f32,
    /// Nominal period. Kept as a labelled constant; the shape uses `speed`.
    pub period: f32,
    pub speed: f32,
}

impl Wave {
    pub fn new(phase_offset: f32) -> Self {
        Self {
            phase_offset,
            amplitude: 50.0,
            period: 200.0,
            speed: 0.02,
        }
    }

    /// Polyline vertices for the current phase, one every 10 units across the width.
    pub fn sample_points(&self, bounds: Bounds) -> Vec<Vector2> {
        let center = bounds.height / 2.0;
        (0..)
            .map(|i| i as f32 * SAMPLE_STEP)
            .take_while(|&x| x < bounds.width)
            .map(|x| {
                let y = ((x + self.phase_offset) * self.speed).sin() * self.amplitude + center;
                Vector2::new(x, y)
            })
            .collect()
    }
}

impl Entity for Wave {
    fn display(&mut self, surface: &mut dyn Surface, _rng: &mut dyn RandomSource) {
        let points = self.sample_points(surface.bounds());
        surface.polyline(&points, WAVE_STROKE);
        self.phase_offset += 1.0;
    }
}
