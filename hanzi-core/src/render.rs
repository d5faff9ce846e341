use crate::geometry::Point;
use crate::grid::{GridLayout, MARKER_RADIUS};
use crate::strokes::Stroke;

/// Line style for a single paint call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pen {
    pub color: &'static str,
    pub width: f64,
    /// Round caps and joins.
    pub round: bool,
}

/// Heavy round brush approximating a writing brush.
pub const INK: Pen = Pen {
    color: "#000",
    width: 15.0,
    round: true,
};

pub const BORDER: Pen = Pen {
    color: "#000",
    width: 2.0,
    round: false,
};

pub const GUIDE: Pen = Pen {
    color: "#ddd",
    width: 1.0,
    round: false,
};

/// Drawing backend. The browser runtime implements this on top of
/// `CanvasRenderingContext2d`.
pub trait Painter {
    fn clear(&mut self, width: f64, height: f64);
    fn stroke_rect(&mut self, width: f64, height: f64, pen: Pen);
    fn line(&mut self, from: Point, to: Point, pen: Pen);
    /// Connected path through all points; called with at least two.
    fn polyline(&mut self, points: &[Point], pen: Pen);
    fn dot(&mut self, center: Point, radius: f64, color: &str);
}

/// Clear the canvas and paint the empty practice grid.
pub fn paint_grid<P: Painter + ?Sized>(painter: &mut P, width: f64, height: f64) {
    let grid = GridLayout::new(width, height);
    painter.clear(width, height);
    painter.stroke_rect(width, height, BORDER);
    for (a, b) in &grid.guides {
        painter.line(*a, *b, GUIDE);
    }
    for m in grid.markers {
        painter.dot(m, MARKER_RADIUS, GUIDE.color);
    }
}

/// Repaint recorded strokes on top of whatever is already on the canvas.
pub fn replay_strokes<P: Painter + ?Sized>(painter: &mut P, strokes: &[Stroke]) {
    for s in strokes.iter().filter(|s| s.points.len() > 1) {
        painter.polyline(&s.points, INK);
    }
}


#[cfg(test)]
mod tests {
    use super::recording::{Op, RecordingPainter};
    use super::*;

    #[test]
    fn grid_is_cleared_framed_then_guided() {
        let mut p = RecordingPainter::default();
        paint_grid(&mut p, 300.0, 300.0);
        assert_eq!(p.ops[0], Op::Clear(300.0, 300.0));
        assert_eq!(p.ops[1], Op::Rect(300.0, 300.0));
        let lines = p.ops.iter().filter(|o| matches!(o, Op::Line(..))).count();
        let dots = p.ops.iter().filter(|o| matches!(o, Op::Dot(_))).count();
        assert_eq!((lines, dots), (4, 4));
    }

    #[test]
    fn replay_skips_degenerate_strokes() {
        let mut p = RecordingPainter::default();
        let strokes = vec![
            Stroke {
                points: vec![Point::new(0.0, 0.0)],
            },
            Stroke {
                points: vec![Point::new(0.0, 0.0), Point::new(4.0, 4.0)],
            },
        ];
        replay_strokes(&mut p, &strokes);
        assert_eq!(p.polylines().len(), 1);
    }
}
