//! Wandering stars with fading trails (excited mood).

use std::collections::VecDeque;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use moodboard_core::{Bounds, RandomSource, Rgba, Stroke, Surface, Vector2};

use super::Entity;

/// Number of stars the excited scene starts with.
pub const STAR_COUNT: usize = 100;

/// Most recent positions kept per star.
pub const TRAIL_LENGTH: usize = 5;

/// Per-update probability of a heading change.
const TURN_CHANCE: f32 = 0.02;

const POINT_COUNT: usize = 5;
const INNER_RADIUS: f32 = 0.4;
const TRAIL_COLOR: Rgba = Rgba::rgb(255, 255, 0);
const TRAIL_ALPHA_MIN: f32 = 50.0;
const TRAIL_ALPHA_MAX: f32 = 255.0;
const POINT_STROKE: Stroke = Stroke::new(TRAIL_COLOR, 1.0);

/// A star that travels in a straight line, occasionally turning, and wraps
/// around the canvas edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vector2,
    /// Body diameter and glyph radius.
    pub size: f32,
    /// Distance travelled per update.
    pub speed: f32,
    /// Heading in radians.
    pub angle: f32,
    pub color: Rgba,
    trail: VecDeque<Vector2>,
}

impl Star {
    pub fn spawn(bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let position = bounds.random_point(rng);
        let size = rng.uniform(3.0, 8.0);
        let speed = rng.uniform(3.0, 8.0);
        let angle = rng.uniform(0.0, TAU);
        let g = rng.uniform(200.0, 255.0);
        let b = rng.uniform(100.0, 200.0);
        let color = Rgba::rgb(255, g.round() as u8, b.round() as u8);
        Self::new(position, size, speed, angle, color)
    }

    /// Create a star with an empty trail.
    pub fn new(position: Vector2, size: f32, speed: f32, angle: f32, color: Rgba) -> Self {
        Self {
            position,
            size,
            speed,
            angle,
            color,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Previously visited positions, oldest first.
    pub fn trail(&self) -> &VecDeque<Vector2> {
        &self.trail
    }
}

/// Teleport a coordinate that left `[0, max]` to the opposite edge.
fn wrap(value: f32, max: f32) -> f32 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

/// Alpha for trail segment `index` out of a trail of `len` points.
fn trail_alpha(index: usize, len: usize) -> u8 {
    let span = (len.saturating_sub(1)).max(1) as f32;
    let t = index as f32 / span;
    (TRAIL_ALPHA_MIN + (TRAIL_ALPHA_MAX - TRAIL_ALPHA_MIN) * t).round() as u8
}

impl Entity for Star {
    fn update(&mut self, bounds: Bounds, rng: &mut dyn RandomSource) {
        self.trail.push_back(self.position);
        if self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }

        self.position += Vector2::from_angle(self.angle, self.speed);
        self.position.x = wrap(self.position.x, bounds.width);
        self.position.y = wrap(self.position.y, bounds.height);

        if rng.chance(TURN_CHANCE) {
            self.angle += rng.uniform(-FRAC_PI_4, FRAC_PI_4);
        }
    }

    fn display(&mut self, surface: &mut dyn Surface, _rng: &mut dyn RandomSource) {
        let len = self.trail.len();
        for (i, (from, to)) in self.trail.iter().zip(self.trail.iter().skip(1)).enumerate() {
            let stroke = Stroke::new(TRAIL_COLOR.with_alpha(trail_alpha(i, len)), 2.0);
            surface.line(*from, *to, stroke);
        }

        surface.fill_circle(self.position, self.size, self.color);

        for k in 0..POINT_COUNT {
            let angle = TAU * k as f32 / POINT_COUNT as f32 - FRAC_PI_2;
            let outer = self.position + Vector2::from_angle(angle, self.size);
            let inner =
                self.position + Vector2::from_angle(angle + PI / 5.0, self.size * INNER_RADIUS);
            surface.line(outer, inner, POINT_STROKE);
        }
    }
}
