//! Drawing colours and stroke styles.

/// An RGBA colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque grey.
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Composite this colour over an opaque background, returning an opaque colour.
    pub fn blend_over(self, background: Rgba) -> Rgba {
        let alpha = self.a as f32 / 255.0;
        let mix = |fg: u8, bg: u8| (bg as f32 + (fg as f32 - bg as f32) * alpha).round() as u8;
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

/// Outline style for lines and polylines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub weight: f32,
}

impl Stroke {
    pub const fn new(color: Rgba, weight: f32) -> Self {
        Self { color, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_over() {
        let bg = Rgba::gray(240);
        assert_eq!(Rgba::rgb(255, 255, 0).blend_over(bg), Rgba::rgb(255, 255, 0));
        assert_eq!(Rgba::rgba(255, 255, 0, 0).blend_over(bg), bg);
        assert_eq!(
            Rgba::rgba(0, 0, 0, 51).blend_over(Rgba::gray(250)),
            Rgba::gray(200)
        );
    }
}
