use std::cell::RefCell;
use std::rc::Rc;

use hanzi_core::{AppConfig, DrawingSurface, Session};
use rand::rngs::StdRng;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::audio::AudioPlayer;
use crate::canvas::CanvasPainter;

/// Everything the page needs at runtime. Built once in `start()` and
/// shared with event callbacks through [`Shared`].
pub struct App {
    pub window: Window,
    pub document: Document,
    pub canvas: HtmlCanvasElement,
    pub ctx: CanvasRenderingContext2d,
    pub config: AppConfig,
    pub session: Session,
    pub surface: DrawingSurface,
    pub audio: AudioPlayer,
    pub rng: StdRng,
}

pub type Shared = Rc<RefCell<App>>;

impl App {
    /// Run `f` with the drawing surface and a painter for this canvas.
    pub fn paint<R>(&mut self, f: impl FnOnce(&mut DrawingSurface, &mut CanvasPainter<'_>) -> R) -> R {
        let mut painter = CanvasPainter::new(&self.ctx);
        f(&mut self.surface, &mut painter)
    }
}
