use crate::geometry::Point;

/// One pen-down to pen-up motion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
}

/// Collects strokes for the character currently on the grid.
///
/// `current` is `Some` exactly while the pointer is down.
#[derive(Clone, Debug, Default)]
pub struct StrokeRecorder {
    completed: Vec<Stroke>,
    current: Option<Vec<Point>>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// Open a new stroke at `p`. A stroke still open from a missed
    /// pointer-up is finished first.
    pub fn begin(&mut self, p: Point) {
        self.end();
        self.current = Some(vec![p]);
    }

    /// Append `p` to the open stroke and return the segment to paint.
    /// Returns `None` while idle.
    pub fn extend(&mut self, p: Point) -> Option<(Point, Point)> {
        let buf = self.current.as_mut()?;
        let last = *buf.last()?;
        buf.push(p);
        Some((last, p))
    }

    /// Close the open stroke. Taps (fewer than two points) are dropped.
    /// Returns whether a stroke was committed.
    pub fn end(&mut self) -> bool {
        match self.current.take() {
            Some(points) if points.len() >= 2 => {
                self.completed.push(Stroke { points });
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.completed.clear();
        self.current = None;
    }

    /// Number of completed strokes; an open stroke is not counted.
    pub fn count(&self) -> usize {
        self.completed.len()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.completed
    }

    /// Points of the stroke still under the pointer.
    pub fn current(&self) -> Option<&[Point]> {
        self.current.as_deref()
    }
}
