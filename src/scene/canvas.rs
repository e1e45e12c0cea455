use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::{Rgba, Surface};

/// [`Surface`] over a browser 2D context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba, width: f64) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
        self.ctx.set_fill_style_str(fill);
        self.ctx.begin_path();
        // arc only fails on a negative radius
        self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU).ok();
        self.ctx.fill();
    }

    fn set_glow(&mut self, blur: f64, color: &str) {
        self.ctx.set_shadow_blur(blur);
        if blur > 0.0 {
            self.ctx.set_shadow_color(color);
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, fill: &str) {
        self.ctx.set_fill_style_str(fill);
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.fill_text(text, x, y).ok();
    }
}
