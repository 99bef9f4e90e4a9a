use crate::dom::Listener;
use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer over the whole page for camera parallax.
pub fn wire_pointer_tracking(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerState>>,
) -> anyhow::Result<Vec<Listener>> {
    let mut listeners = Vec::with_capacity(2);

    let win = window.clone();
    let on_move = pointer.clone();
    listeners.push(Listener::new(window, "pointermove", true, move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            let mut p = on_move.borrow_mut();
            p.ndc = input::pointer_ndc(ev, &win);
            p.inside = true;
        }
    })?);

    if let Some(root) = document.document_element() {
        listeners.push(Listener::new(&root, "pointerleave", true, move |_| {
            pointer.borrow_mut().inside = false;
        })?);
    }
    Ok(listeners)
}
