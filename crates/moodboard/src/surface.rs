//! Terminal rendering surface backed by a ratatui braille canvas.

use moodboard_config::Config;
use moodboard_core::{Bounds, Rgba, Stroke, Surface, Vector2};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points},
};

/// Radius step between the rings that fill a disc.
const RING_STEP: f64 = 2.0;

/// Maps terminal cells to canvas units and reserves the control strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    cell_width: f32,
    cell_height: f32,
    reserved_strip: f32,
}

impl CanvasLayout {
    pub fn new(cell_width: f32, cell_height: f32, reserved_strip: f32) -> Self {
        Self {
            cell_width,
            cell_height,
            reserved_strip,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cell_width, config.cell_height, config.reserved_strip)
    }

    /// Terminal rows given to the control strip.
    pub fn strip_rows(&self) -> u16 {
        (self.reserved_strip / self.cell_height).ceil() as u16
    }

    /// Canvas size for a terminal of `cols` x `rows`: the full viewport width
    /// and the viewport height minus the reserved strip.
    ///
    /// The strip itself occupies whole rows (`strip_rows`), so when
    /// `reserved_strip` is not a multiple of `cell_height` the canvas is drawn
    /// into slightly fewer units than its bounds. With the defaults that is a
    /// 12 unit vertical squash, accepted so the bounds stay exactly
    /// viewport height minus `reserved_strip`.
    pub fn canvas_bounds(&self, cols: u16, rows: u16) -> Bounds {
        let width = cols as f32 * self.cell_width;
        let height = rows as f32 * self.cell_height - self.reserved_strip;
        Bounds::new(width, height.max(0.0))
    }

    /// Split the terminal into canvas and control strip areas.
    pub fn split(&self, area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(self.strip_rows())]).areas(area)
    }
}

/// A primitive already converted to ratatui coordinates and colours.
#[derive(Debug, Clone)]
enum Mark {
    Disc {
        x: f64,
        y: f64,
        radius: f64,
        color: Color,
    },
    Segment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
    },
}

/// Collects one frame of primitives and paints them on a [`Canvas`].
///
/// Terminal cells carry no alpha, so translucent colours are blended
/// against the background when recorded. Stroke weight has no terminal
/// equivalent and is ignored.
#[derive(Debug)]
pub struct CanvasSurface {
    bounds: Bounds,
    background: Rgba,
    marks: Vec<Mark>,
}

fn to_color(rgba: Rgba) -> Color {
    Color::Rgb(rgba.r, rgba.g, rgba.b)
}

impl CanvasSurface {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            background: Rgba::gray(0),
            marks: Vec::new(),
        }
    }

    /// Canvas y grows upward, so flip the screen-space y.
    fn to_canvas(&self, p: Vector2) -> (f64, f64) {
        (p.x as f64, (self.bounds.height - p.y) as f64)
    }

    fn blend(&self, color: Rgba) -> Color {
        to_color(color.blend_over(self.background))
    }

    /// Paint the recorded frame into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(to_color(self.background))
            .x_bounds([0.0, self.bounds.width as f64])
            .y_bounds([0.0, self.bounds.height as f64])
            .paint(|ctx| {
                for mark in &self.marks {
                    match *mark {
                        Mark::Disc {
                            x,
                            y,
                            radius,
                            color,
                        } => {
                            let mut r = radius;
                            while r > 0.0 {
                                ctx.draw(&Circle {
                                    x,
                                    y,
                                    radius: r,
                                    color,
                                });
                                r -= RING_STEP;
                            }
                            ctx.draw(&Points {
                                coords: &[(x, y)],
                                color,
                            });
                        }
                        Mark::Segment {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        } => ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color,
                        }),
                    }
                }
            });
        frame.render_widget(canvas, area);
    }

    fn push_segment(&mut self, from: Vector2, to: Vector2, stroke: Stroke) {
        let (x1, y1) = self.to_canvas(from);
        let (x2, y2) = self.to_canvas(to);
        let color = self.blend(stroke.color);
        self.marks.push(Mark::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
        });
    }
}

impl Surface for CanvasSurface {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn background(&mut self, gray: u8) {
        self.background = Rgba::gray(gray);
        self.marks.clear();
    }

    fn fill_circle(&mut self, center: Vector2, diameter: f32, color: Rgba) {
        let (x, y) = self.to_canvas(center);
        let color = self.blend(color);
        self.marks.push(Mark::Disc {
            x,
            y,
            radius: diameter as f64 / 2.0,
            color,
        });
    }

    fn line(&mut self, from: Vector2, to: Vector2, stroke: Stroke) {
        self.push_segment(from, to, stroke);
    }

    fn polyline(&mut self, points: &[Vector2], stroke: Stroke) {
        for pair in points.windows(2) {
            self.push_segment(pair[0], pair[1], stroke);
        }
    }
}
