use std::cell::RefCell;
use std::rc::Rc;

use hanzi_core::{AppConfig, CANVAS_HEIGHT, DrawingSurface, Session, StrokeTable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

mod audio;
mod canvas;
mod controller;
mod dom;
mod input;
mod net;
mod state;
mod ui;
mod utils;

use audio::AudioPlayer;
use state::App;
use utils::{base_url_hint, log, warn};

fn init_canvas(
    document: &Document,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let cv = document
        .get_element_by_id("writingCanvas")
        .ok_or_else(|| JsValue::from_str("canvas #writingCanvas not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = cv
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((cv, ctx))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let missing = dom::missing_elements(&document);
    if !missing.is_empty() {
        warn(&format!("missing page elements: {}", missing.join(", ")));
    }
    let (canvas, ctx) = init_canvas(&document)?;

    let search = window.location().search().unwrap_or_default();
    let config = AppConfig::from_page(base_url_hint(&window), &search);
    log(&format!(
        "base url '{}', mode {:?}",
        config.base_url, config.initial_mode
    ));

    let mut session = Session::new(StrokeTable::default());
    session.set_mode(config.initial_mode.is_review());
    let audio = AudioPlayer::new(window.clone(), &config.speech_lang);
    let surface = DrawingSurface::new(canvas.width() as f64, CANVAS_HEIGHT);

    let state = Rc::new(RefCell::new(App {
        window,
        document,
        canvas,
        ctx,
        config,
        session,
        surface,
        audio,
        rng: StdRng::from_entropy(),
    }));

    {
        let mut app = state.borrow_mut();
        canvas::fit_to_container(&mut app);
        dom::show_mode(&app.document, app.session.mode());
        dom::show_progress(&app.document, app.session.summary());
    }

    input::attach_canvas_input(state.clone())?;
    input::attach_window_listeners(state.clone())?;
    ui::attach_ui(state.clone())?;
    controller::load(&state);

    log("app initialised");
    Ok(())
}
