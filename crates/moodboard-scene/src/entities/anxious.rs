//! Rotating, jittering line segments (anxious mood).

use std::f32::consts::TAU;

use moodboard_core::{Bounds, RandomSource, Rgba, Stroke, Surface, Vector2};

use super::Entity;

/// Number of lines in the anxious scene.
pub const ANXIOUS_LINE_COUNT: usize = 20;

const JITTER: f32 = 5.0;
const ROTATION_STEP: f32 = 0.02;
const LINE_STROKE: Stroke = Stroke::new(Rgba::rgb(150, 100, 100), 1.0);

/// A segment anchored at `origin` that slowly rotates and shakes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnxiousLine {
    pub origin: Vector2,
    pub length: f32,
    pub angle: f32,
    /// Offset used for the most recent draw; re-rolled every display.
    pub jitter: f32,
}

impl AnxiousLine {
    pub fn spawn(bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let origin = bounds.random_point(rng);
        let length = rng.uniform(50.0, 150.0);
        let angle = rng.uniform(0.0, TAU);
        Self {
            origin,
            length,
            angle,
            jitter: 0.0,
        }
    }

    /// Segment endpoints for the current angle and jitter.
    pub fn endpoints(&self) -> (Vector2, Vector2) {
        let shake = Vector2::new(self.jitter, self.jitter);
        let from = self.origin + shake;
        let to = self.origin + Vector2::from_angle(self.angle, self.length) + shake;
        (from, to)
    }
}

impl Entity for AnxiousLine {
    fn display(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        self.jitter = rng.uniform(-JITTER, JITTER);
        let (from, to) = self.endpoints();
        surface.line(from, to, LINE_STROKE);
        self.angle += ROTATION_STEP;
    }
}
