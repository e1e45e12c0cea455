use super::{Rgba, Surface};

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgba,
        width: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        fill: String,
    },
    Glow {
        blur: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font: String,
        fill: String,
    },
}

/// Surface that keeps every call in order. Used as the fake canvas in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop everything recorded so far.
    pub fn reset(&mut self) {
        self.ops.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Text { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba, width: f64) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            color,
            width,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str) {
        self.ops.push(DrawOp::Circle {
            x,
            y,
            radius,
            fill: fill.to_string(),
        });
    }

    fn set_glow(&mut self, blur: f64, color: &str) {
        self.ops.push(DrawOp::Glow {
            blur,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, fill: &str) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
            fill: fill.to_string(),
        });
    }
}
