use crate::geometry::Point;
use crate::render::{INK, Painter, paint_grid, replay_strokes};
use crate::strokes::StrokeRecorder;

/// Fixed pixel height of the writing canvas; only the width follows layout.
pub const CANVAS_HEIGHT: f64 = 300.0;

/// Freehand writing area: the stroke recorder plus the pixel size it is
/// painted at. Painting goes through whatever [`Painter`] the caller hands
/// in, so the surface itself owns no rendering resources.
#[derive(Clone, Debug)]
pub struct DrawingSurface {
    width: f64,
    height: f64,
    recorder: StrokeRecorder,
}

impl DrawingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        DrawingSurface {
            width,
            height,
            recorder: StrokeRecorder::new(),
        }
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn is_drawing(&self) -> bool {
        self.recorder.is_drawing()
    }

    pub fn pointer_down(&mut self, p: Point) {
        self.recorder.begin(p);
    }

    /// Extend the open stroke and paint the new segment immediately.
    pub fn pointer_move<P: Painter + ?Sized>(&mut self, p: Point, painter: &mut P) {
        if let Some((from, to)) = self.recorder.extend(p) {
            painter.line(from, to, INK);
        }
    }

    /// Pointer up, pointer leaving while down, or touch end.
    pub fn pointer_up(&mut self) -> bool {
        self.recorder.end()
    }

    pub fn clear<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        self.recorder.clear();
        paint_grid(painter, self.width, self.height);
    }

    /// Adopt a new pixel size and repaint, keeping every completed stroke.
    pub fn resize<P: Painter + ?Sized>(&mut self, width: f64, height: f64, painter: &mut P) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.redraw(painter);
    }

    /// Grid plus replay of completed strokes at the current size. A stroke
    /// still being drawn is repainted too, so a reflow mid-stroke keeps its
    /// ink.
    pub fn redraw<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        paint_grid(painter, self.width, self.height);
        replay_strokes(painter, self.recorder.strokes());
        if let Some(open) = self.recorder.current().filter(|pts| pts.len() > 1) {
            painter.polyline(open, INK);
        }
    }

    pub fn stroke_count(&self) -> usize {
        self.recorder.count()
    }
}
