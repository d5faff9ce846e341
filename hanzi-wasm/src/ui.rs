use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::controller;
use crate::dom;
use crate::state::Shared;

fn on_click(btn: &HtmlElement, state: &Shared, action: fn(&Shared)) {
    let st = state.clone();
    let onclick = Closure::<dyn FnMut()>::wrap(Box::new(move || action(&st)));
    btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
    onclick.forget();
}

/// Wire the control buttons and the popup's dismiss button. Buttons missing
/// from the page are skipped; `start()` has already reported them.
pub fn attach_ui(state: Shared) -> Result<(), JsValue> {
    let doc = state.borrow().document.clone();

    let actions: [(&str, fn(&Shared)); 6] = [
        ("learnBtn", |st| controller::set_mode(st, false)),
        ("reviewBtn", |st| controller::set_mode(st, true)),
        ("speakBtn", controller::speak),
        ("nextBtn", controller::next),
        ("clearBtn", controller::clear),
        ("checkBtn", controller::check),
    ];
    for (id, action) in actions {
        if let Some(btn) = dom::by_id(&doc, id) {
            on_click(&btn, &state, action);
        }
    }

    if let Some(btn) = dom::popup_button(&doc) {
        on_click(&btn, &state, |st| dom::hide_popup(&st.borrow().document));
    }
    Ok(())
}
