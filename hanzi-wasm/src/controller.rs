use gloo::timers::future::TimeoutFuture;
use hanzi_core::config::FEEDBACK_SPEECH_DELAY_MS;
use hanzi_core::fallback_characters;
use wasm_bindgen_futures::spawn_local;

use crate::dom;
use crate::net;
use crate::state::{App, Shared};
use crate::utils::{log, now_iso, now_ms, warn};

/// Show the current character and mode, and start over on a blank grid.
pub fn refresh_display(app: &mut App) {
    dom::show_character(&app.document, app.session.current());
    dom::show_mode(&app.document, app.session.mode());
    app.paint(|surface, painter| surface.clear(painter));
}

pub fn refresh_progress(app: &App) {
    let summary = app.session.summary();
    log(&format!(
        "progress {:.1}% ({})",
        summary.percent(),
        summary.label()
    ));
    dom::show_progress(&app.document, summary);
}

/// Fetch characters and progress concurrently. Neither request waits for
/// the other and both degrade to local defaults.
pub fn load(state: &Shared) {
    let (window, config) = {
        let app = state.borrow();
        (app.window.clone(), app.config.clone())
    };

    let st = state.clone();
    let (win, cfg) = (window.clone(), config.clone());
    spawn_local(async move {
        let characters = match net::load_characters(&win, &cfg).await {
            Ok(c) => {
                log(&format!("loaded {} characters", c.len()));
                c
            }
            Err(e) => {
                warn(&format!("failed to load characters: {}; using built-in list", e));
                fallback_characters()
            }
        };
        let mut guard = st.borrow_mut();
        let app = &mut *guard;
        app.session.set_characters(characters);
        refresh_display(app);
        refresh_progress(app);
    });

    let st = state.clone();
    spawn_local(async move {
        let progress = match net::load_progress(&window, &config).await {
            Ok(p) => {
                log(&format!("loaded {} progress entries", p.len()));
                p
            }
            Err(e) => {
                warn(&format!("failed to load progress: {}; starting empty", e));
                Default::default()
            }
        };
        let mut app = st.borrow_mut();
        app.session.merge_progress(progress);
        refresh_progress(&app);
    });
}

pub fn set_mode(state: &Shared, is_review: bool) {
    let mut guard = state.borrow_mut();
    let app = &mut *guard;
    app.session.set_mode(is_review);
    refresh_display(app);
}

pub fn next(state: &Shared) {
    let mut guard = state.borrow_mut();
    let app = &mut *guard;
    app.session.next();
    refresh_display(app);
}

pub fn clear(state: &Shared) {
    state
        .borrow_mut()
        .paint(|surface, painter| surface.clear(painter));
}

/// Grade the drawing, show the popup, then persist and speak.
///
/// The local progress update and popup are done before either request is
/// issued, and the spoken verdict is delayed so the popup never waits on
/// audio.
pub fn check(state: &Shared) {
    let mut guard = state.borrow_mut();
    let app = &mut *guard;
    app.audio.stop();

    let actual = app.surface.stroke_count();
    let now = now_iso();
    let Some(report) = app.session.check(actual, &mut app.rng, &now) else {
        warn("check requested with no character selected");
        return;
    };
    log(&format!(
        "check '{}': {} strokes -> {:?}",
        report.glyph, actual, report.outcome
    ));
    dom::show_popup(&app.document, &report.feedback);
    if report.persist.is_some() {
        log(&format!("marked '{}' as learned", report.glyph));
        refresh_progress(app);
    }

    let window = app.window.clone();
    let config = app.config.clone();
    let audio = app.audio.clone();
    drop(guard);

    if let Some(update) = report.persist {
        let (window, config) = (window.clone(), config.clone());
        spawn_local(async move {
            match net::persist_progress(&window, &config, &update).await {
                Ok(()) => log(&format!("saved progress for '{}'", update.character)),
                Err(e) => warn(&format!(
                    "failed to save progress for '{}' (kept locally): {}",
                    update.character, e
                )),
            }
        });
    }

    if config.mute_feedback {
        return;
    }
    let speech = report.feedback.speech;
    spawn_local(async move {
        TimeoutFuture::new(FEEDBACK_SPEECH_DELAY_MS).await;
        let url = net::tts_url(&config, speech, Some(now_ms()));
        audio.say(&url, speech).await;
    });
}

/// Pronounce the current character.
pub fn speak(state: &Shared) {
    let (audio, url, glyph) = {
        let app = state.borrow();
        let Some(record) = app.session.current() else {
            return;
        };
        let glyph = record.character.clone();
        (
            app.audio.clone(),
            net::tts_url(&app.config, &glyph, None),
            glyph,
        )
    };
    audio.stop();
    spawn_local(async move {
        audio.say(&url, &glyph).await;
    });
}
