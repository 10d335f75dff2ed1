//! Drawing abstraction the engine renders through.
//!
//! The engine never talks to a browser API directly. Front ends implement
//! [`Surface`] over whatever 2D target they own (the web crate wraps a
//! `CanvasRenderingContext2d`), and tests implement it with a recorder.

use glam::Vec2;

/// Straight (non-premultiplied) colour with 8-bit channels and a unit alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` notation accepted by canvas style setters.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub bold: bool,
}

pub trait Surface {
    /// Backing size in pixels.
    fn size(&self) -> Vec2;
    /// Wipe to fully transparent.
    fn clear(&mut self);
    /// Paint `color` over the whole surface; a translucent colour leaves trails.
    fn wash(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);
    /// Radial falloff from `color` at `inner` to transparent at `outer`.
    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba);
    /// Text centred horizontally and vertically on `at`.
    fn fill_text(&mut self, text: &str, at: Vec2, style: TextStyle, color: Rgba);
}
