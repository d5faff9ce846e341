use hanzi_core::{CharacterRecord, Feedback, Mode, ProgressSummary};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::utils::warn;

/// Ids the page is expected to provide.
pub const REQUIRED_IDS: [&str; 7] = [
    "writingCanvas",
    "learnBtn",
    "reviewBtn",
    "speakBtn",
    "nextBtn",
    "clearBtn",
    "checkBtn",
];

pub fn missing_elements(doc: &Document) -> Vec<&'static str> {
    REQUIRED_IDS
        .iter()
        .copied()
        .filter(|id| doc.get_element_by_id(id).is_none())
        .collect()
}

fn select(doc: &Document, selector: &str) -> Option<HtmlElement> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// First match of `primary`, else of `fallback`.
fn select_either(doc: &Document, primary: &str, fallback: &str) -> Option<HtmlElement> {
    select(doc, primary).or_else(|| select(doc, fallback))
}

pub fn by_id(doc: &Document, id: &str) -> Option<HtmlElement> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn show_character(doc: &Document, record: Option<&CharacterRecord>) {
    let Some(record) = record else {
        warn("no character data to display");
        return;
    };
    if let Some(el) = select_either(doc, "#characterDisplay .character", ".character") {
        el.set_text_content(Some(&record.character));
    }
    if let Some(el) = select_either(doc, "#characterDisplay .pinyin", ".pinyin") {
        el.set_text_content(Some(&record.pinyin));
    }
}

pub fn show_mode(doc: &Document, mode: Mode) {
    for (id, active) in [("learnBtn", !mode.is_review()), ("reviewBtn", mode.is_review())] {
        if let Some(btn) = by_id(doc, id) {
            let _ = btn.class_list().toggle_with_force("active", active);
        }
    }
}

pub fn show_progress(doc: &Document, summary: ProgressSummary) {
    let percent = summary.percent();
    if let Some(bar) = select_either(doc, "#progressBar .progress", ".progress") {
        let style = bar.style();
        let _ = style.set_property("width", &format!("{}%", percent));
        if percent > 0.0 {
            let _ = style.set_property("min-width", "5px");
            let _ = style.set_property("display", "block");
        } else {
            let _ = style.set_property("min-width", "0");
        }
    }
    let Some(container) = select_either(doc, "#progressBar", ".progress-container") else {
        return;
    };
    let label = match container.query_selector(".progress-text").ok().flatten() {
        Some(el) => el,
        None => {
            let Ok(el) = doc.create_element("div") else {
                return;
            };
            el.set_class_name("progress-text");
            if container.append_child(&el).is_err() {
                return;
            }
            el
        }
    };
    label.set_text_content(Some(&summary.label()));
}

pub fn show_popup(doc: &Document, feedback: &Feedback) {
    let Some(popup) = select(doc, ".result-popup") else {
        warn("result popup element missing");
        return;
    };
    popup.set_class_name(&format!("result-popup {}", feedback.css_class()));
    for (selector, text) in [
        (".icon", feedback.icon.as_str()),
        (".message", feedback.message.as_str()),
        (".sub-message", feedback.sub_message.as_str()),
        (".button", feedback.button_label()),
    ] {
        if let Ok(Some(el)) = popup.query_selector(selector) {
            el.set_text_content(Some(text));
        }
    }
    let _ = popup.class_list().add_1("show");
    if let Some(overlay) = select(doc, ".popup-overlay") {
        let _ = overlay.class_list().add_1("show");
    }
}

pub fn hide_popup(doc: &Document) {
    for selector in [".result-popup", ".popup-overlay"] {
        if let Some(el) = select(doc, selector) {
            let _ = el.class_list().remove_1("show");
        }
    }
}

/// Dismiss button inside the popup.
pub fn popup_button(doc: &Document) -> Option<HtmlElement> {
    select(doc, ".result-popup .button")
}
