//! Canvas 2D context as a drawing surface.
//!
//! The context transform is scaled by the device pixel ratio, so every
//! coordinate handed to the core is in CSS pixels.

use crate::constants::LABEL_FONT_FAMILY;
use crate::dom;
use anyhow::{anyhow, Result};
use backdrop_core::{Rgba, Surface, TextStyle};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext(\"2d\") failed: {:?}", e))?
            .ok_or_else(|| anyhow!("2D canvas context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected context object: {:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            size: Vec2::ZERO,
        };
        surface.sync_size();
        Ok(surface)
    }

    /// Resize the backing store to the element's current box and return the
    /// new CSS size. Resizing resets the context, so the transform is
    /// reapplied here.
    pub fn sync_size(&mut self) -> Vec2 {
        let (size, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.size = size;
        size
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn wash(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.circle_path(center, radius);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.stroke_polyline(&[from, to], width, color);
    }

    fn stroke_polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.stroke();
    }

    fn fill_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: Rgba) {
        let (x, y) = (center.x as f64, center.y as f64);
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, inner.max(0.0) as f64, x, y, outer.max(0.0) as f64)
        {
            Ok(g) => g,
            Err(e) => {
                log::debug!("[canvas] radial gradient failed: {:?}", e);
                return;
            }
        };
        _ = gradient.add_color_stop(0.0, &color.css());
        _ = gradient.add_color_stop(1.0, &color.with_alpha(0.0).css());
        self.circle_path(center, outer);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: TextStyle, color: Rgba) {
        let weight = if style.bold { "bold " } else { "" };
        self.ctx
            .set_font(&format!("{}{}px {}", weight, style.size_px, LABEL_FONT_FAMILY));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&color.css());
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
