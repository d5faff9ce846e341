use hanzi_core::{Point, client_to_canvas};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent};

use crate::canvas::fit_to_container;
use crate::state::Shared;
use crate::utils::{element_rect, log};

/// Convert client coordinates into canvas pixel coordinates using the
/// canvas's current on-screen rect.
fn canvas_point(cv: &HtmlCanvasElement, client_x: f64, client_y: f64) -> Point {
    client_to_canvas(
        client_x,
        client_y,
        element_rect(cv),
        cv.width() as f64,
        cv.height() as f64,
    )
}

fn touch_point(e: &TouchEvent, cv: &HtmlCanvasElement) -> Option<Point> {
    let touch = e.touches().item(0)?;
    Some(canvas_point(
        cv,
        touch.client_x() as f64,
        touch.client_y() as f64,
    ))
}

/// Mouse and touch drawing on the writing canvas.
pub fn attach_canvas_input(state: Shared) -> Result<(), JsValue> {
    let canvas = state.borrow().canvas.clone();

    {
        let st = state.clone();
        let mousedown = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            let pt = canvas_point(&s.canvas, e.client_x() as f64, e.client_y() as f64);
            s.surface.pointer_down(pt);
        }));
        canvas.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        mousedown.forget();
    }
    {
        let st = state.clone();
        let mousemove = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |e: MouseEvent| {
            let mut s = st.borrow_mut();
            if !s.surface.is_drawing() {
                return;
            }
            let pt = canvas_point(&s.canvas, e.client_x() as f64, e.client_y() as f64);
            s.paint(|surface, painter| surface.pointer_move(pt, painter));
        }));
        canvas.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        mousemove.forget();
    }
    for event in ["mouseup", "mouseleave"] {
        let st = state.clone();
        let release = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_e: MouseEvent| {
            let mut s = st.borrow_mut();
            if s.surface.is_drawing() {
                s.surface.pointer_up();
            }
        }));
        canvas.add_event_listener_with_callback(event, release.as_ref().unchecked_ref())?;
        release.forget();
    }

    // Touch listeners must be non-passive so preventDefault stops the page
    // from scrolling while writing.
    let opts = AddEventListenerOptions::new();
    opts.set_passive(false);
    {
        let st = state.clone();
        let touchstart = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            e.stop_propagation();
            let mut s = st.borrow_mut();
            if let Some(pt) = touch_point(&e, &s.canvas) {
                s.surface.pointer_down(pt);
            }
        }));
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchstart",
            touchstart.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchstart.forget();
    }
    {
        let st = state.clone();
        let touchmove = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            e.stop_propagation();
            let mut s = st.borrow_mut();
            if !s.surface.is_drawing() {
                return;
            }
            if let Some(pt) = touch_point(&e, &s.canvas) {
                s.paint(|surface, painter| surface.pointer_move(pt, painter));
            }
        }));
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            touchmove.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchmove.forget();
    }
    for event in ["touchend", "touchcancel"] {
        let st = state.clone();
        let touchend = Closure::<dyn FnMut(TouchEvent)>::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            e.stop_propagation();
            st.borrow_mut().surface.pointer_up();
        }));
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            touchend.as_ref().unchecked_ref(),
            &opts,
        )?;
        touchend.forget();
    }

    log("canvas input attached");
    Ok(())
}

/// Window resize refits the canvas; scrolling repaints so strokes survive
/// any reflow it triggers.
pub fn attach_window_listeners(state: Shared) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    {
        let st = state.clone();
        let onresize = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            fit_to_container(&mut st.borrow_mut());
        }));
        window.add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())?;
        onresize.forget();
    }
    {
        let st = state.clone();
        let onscroll = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let mut s = st.borrow_mut();
            if s.surface.stroke_count() > 0 {
                s.paint(|surface, painter| surface.redraw(painter));
            }
        }));
        window.add_event_listener_with_callback("scroll", onscroll.as_ref().unchecked_ref())?;
        onscroll.forget();
    }
    Ok(())
}
