use serde::{Deserialize, Serialize};

/// A position in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// On-screen placement of the canvas element, as reported by
/// `getBoundingClientRect()`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Convert client (viewport) coordinates into the canvas's internal pixel
/// coordinates so ink lands under the pointer even when CSS scales the
/// element.
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect: ViewRect,
    canvas_w: f64,
    canvas_h: f64,
) -> Point {
    Point {
        x: (client_x - rect.left) * canvas_w / rect.width.max(1.0),
        y: (client_y - rect.top) * canvas_h / rect.height.max(1.0),
    }
}
