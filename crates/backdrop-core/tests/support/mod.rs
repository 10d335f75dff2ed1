// Recording surface shared by the host-side tests.

#![allow(dead_code)]

use backdrop_core::{Rgba, Surface, TextStyle};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Wash(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Ring { center: Vec2, radius: f32 },
    Line { from: Vec2, to: Vec2, color: Rgba },
    Polyline(Vec<Vec2>),
    Glow { center: Vec2 },
    Text { text: String, at: Vec2 },
}

pub struct RecordingSurface {
    pub size: Vec2,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
    }

    pub fn circles(&self) -> Vec<&Op> {
        self.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).collect()
    }

    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn wash(&mut self, color: Rgba) {
        self.ops.push(Op::Wash(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle { center, radius, color });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, _width: f32, _color: Rgba) {
        self.ops.push(Op::Ring { center, radius });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, _width: f32, color: Rgba) {
        self.ops.push(Op::Line { from, to, color });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], _width: f32, _color: Rgba) {
        self.ops.push(Op::Polyline(points.to_vec()));
    }

    fn fill_glow(&mut self, center: Vec2, _inner: f32, _outer: f32, _color: Rgba) {
        self.ops.push(Op::Glow { center });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, _style: TextStyle, _color: Rgba) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            at,
        });
    }
}
