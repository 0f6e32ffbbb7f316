use crate::dom;
use crate::surface::{Fill, Stroke, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a canvas 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the element's CSS size and return the CSS
    /// size. Drawing stays in CSS px; the transform absorbs the pixel ratio.
    pub fn fit(&self) -> Vec2 {
        let (size, dpr) = dom::sync_canvas_backing_size(&self.canvas);
        // Resizing the backing store resets the transform, so this does not compound.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        size
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(&stroke.css());
        ctx.set_line_width(stroke.width as f64);
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.stroke();
    }

    fn dot(&mut self, center: Vec2, radius: f32, fill: Fill) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.set_fill_style_str(fill.color);
        match fill.glow {
            Some((color, blur)) => {
                ctx.set_shadow_color(color);
                ctx.set_shadow_blur(blur as f64);
            }
            None => ctx.set_shadow_blur(0.0),
        }
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}
