use hanzi_core::{CANVAS_HEIGHT, Painter, Pen, Point};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::App;

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(color),
    );
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, color: &str) {
    let _ = js_sys::Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(color),
    );
}

/// [`Painter`] backed by the page's 2D context.
pub struct CanvasPainter<'a> {
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasPainter<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d) -> Self {
        CanvasPainter { ctx }
    }

    // Resizing the canvas resets context state, so the pen is applied on
    // every call.
    fn apply(&self, pen: Pen) {
        set_stroke_style(self.ctx, pen.color);
        self.ctx.set_line_width(pen.width);
        if pen.round {
            self.ctx.set_line_cap("round");
            self.ctx.set_line_join("round");
        } else {
            self.ctx.set_line_cap("butt");
            self.ctx.set_line_join("miter");
        }
    }
}

impl Painter for CanvasPainter<'_> {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn stroke_rect(&mut self, width: f64, height: f64, pen: Pen) {
        self.apply(pen);
        self.ctx.stroke_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: Point, to: Point, pen: Pen) {
        self.apply(pen);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Point], pen: Pen) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.apply(pen);
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.stroke();
    }

    fn dot(&mut self, center: Point, radius: f64, color: &str) {
        set_fill_style(self.ctx, color);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }
}

/// Width the canvas should take: its container's rendered width.
fn layout_width(canvas: &HtmlCanvasElement) -> f64 {
    let w = match canvas.parent_element() {
        Some(parent) => parent.get_bounding_client_rect().width(),
        None => canvas.client_width() as f64,
    };
    w.round().clamp(1.0, 10000.0)
}

/// Match the canvas backing store to its container width and the fixed
/// height, then repaint grid and strokes.
pub fn fit_to_container(app: &mut App) {
    let width = layout_width(&app.canvas);
    app.canvas.set_width(width as u32);
    app.canvas.set_height(CANVAS_HEIGHT as u32);
    app.paint(|surface, painter| surface.resize(width, CANVAS_HEIGHT, painter));
}
