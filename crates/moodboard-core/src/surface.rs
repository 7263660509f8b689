//! The drawing surface the scene renders onto.

use crate::color::{Rgba, Stroke};
use crate::random::RandomSource;
use crate::vector::Vector2;

/// Canvas dimensions in canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Uniformly random point inside the canvas. Draws x first, then y.
    pub fn random_point(&self, rng: &mut dyn RandomSource) -> Vector2 {
        let x = rng.uniform(0.0, self.width);
        let y = rng.uniform(0.0, self.height);
        Vector2::new(x, y)
    }
}

/// Drawing primitives provided by the host.
///
/// Coordinates follow screen convention: origin top-left, y grows downward.
pub trait Surface {
    /// Current canvas dimensions. May change between frames on resize.
    fn bounds(&self) -> Bounds;

    /// Fill the whole canvas with a grey level.
    fn background(&mut self, gray: u8);

    /// Filled circle without outline.
    fn fill_circle(&mut self, center: Vector2, diameter: f32, color: Rgba);

    /// Stroked line segment.
    fn line(&mut self, from: Vector2, to: Vector2, stroke: Stroke);

    /// Open, unfilled polyline through `points`.
    fn polyline(&mut self, points: &[Vector2], stroke: Stroke);
}

/// A primitive captured by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background(u8),
    FillCircle {
        center: Vector2,
        diameter: f32,
        color: Rgba,
    },
    Line {
        from: Vector2,
        to: Vector2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Vector2>,
        stroke: Stroke,
    },
}

/// Surface that records every primitive instead of drawing it.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub bounds: Bounds,
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            commands: Vec::new(),
        }
    }
}

impl Surface for Recorder {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn background(&mut self, gray: u8) {
        self.commands.push(DrawCommand::Background(gray));
    }

    fn fill_circle(&mut self, center: Vector2, diameter: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            diameter,
            color,
        });
    }

    fn line(&mut self, from: Vector2, to: Vector2, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Vector2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }
}
