//! Browser-independent core of the handwriting practice widget: stroke
//! capture, grid painting, stroke-count grading, feedback selection,
//! progress bookkeeping and the session state machine.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod geometry;
pub mod grid;
pub mod judge;
pub mod progress;
pub mod render;
pub mod session;
pub mod strokes;
pub mod surface;

pub use catalog::{CharacterRecord, StrokeTable, fallback_characters};
pub use config::AppConfig;
pub use error::ApiError;
pub use feedback::{Feedback, Tone, pick_random};
pub use geometry::{Point, ViewRect, client_to_canvas};
pub use judge::{Verdict, classify};
pub use progress::{ProgressEntry, ProgressMap, ProgressSummary, ProgressUpdate};
pub use render::{Painter, Pen};
pub use session::{CheckReport, Mode, Outcome, Session};
pub use surface::{CANVAS_HEIGHT, DrawingSurface};
