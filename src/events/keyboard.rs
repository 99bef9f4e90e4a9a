use crate::dom::Listener;
use crate::overlay;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_debug_toggle(key: &str) -> bool {
    matches!(key, "d" | "D")
}

/// Plain key presses only; chords and auto-repeat are left to the browser.
#[inline]
pub fn is_unmodified(ev: &web::KeyboardEvent) -> bool {
    !(ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat())
}

/// Keys typed into form fields must not toggle the readout.
fn targets_text_input(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn wire_debug_toggle(
    window: &web::Window,
    document: web::Document,
    visible: Rc<Cell<bool>>,
) -> anyhow::Result<Listener> {
    Listener::new(window, "keydown", false, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if !is_debug_toggle(&ev.key()) || !is_unmodified(ev) || targets_text_input(ev) {
            return;
        }
        let now = !visible.get();
        visible.set(now);
        overlay::set_visible(&document, now);
        log::info!("[keys] debug readout {}", if now { "on" } else { "off" });
    })
}
