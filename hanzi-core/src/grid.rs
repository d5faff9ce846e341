//! Geometry of the 田字格 practice grid drawn under the ink.

use crate::geometry::Point;

/// Radius of the quarter-point guide dots (px).
pub const MARKER_RADIUS: f64 = 2.0;

/// Guide lines and dots for a canvas of the given pixel size.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
    /// Midlines then diagonals.
    pub guides: Vec<(Point, Point)>,
    pub markers: [Point; 4],
}

impl GridLayout {
    pub fn new(width: f64, height: f64) -> Self {
        let (w, h) = (width, height);
        let guides = vec![
            (Point::new(0.0, h / 2.0), Point::new(w, h / 2.0)),
            (Point::new(w / 2.0, 0.0), Point::new(w / 2.0, h)),
            (Point::new(0.0, 0.0), Point::new(w, h)),
            (Point::new(w, 0.0), Point::new(0.0, h)),
        ];
        let markers = [
            Point::new(w / 4.0, h / 4.0),
            Point::new(w * 3.0 / 4.0, h / 4.0),
            Point::new(w / 4.0, h * 3.0 / 4.0),
            Point::new(w * 3.0 / 4.0, h * 3.0 / 4.0),
        ];
        GridLayout {
            width,
            height,
            guides,
            markers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides_cross_at_center() {
        let g = GridLayout::new(400.0, 300.0);
        assert_eq!(g.guides.len(), 4);
        let (a, b) = g.guides[0];
        assert_eq!((a.y, b.y), (150.0, 150.0));
        let (a, b) = g.guides[1];
        assert_eq!((a.x, b.x), (200.0, 200.0));
        assert_eq!(g.markers[3], Point::new(300.0, 225.0));
    }
}
