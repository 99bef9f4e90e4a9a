use crate::core::{ScrollDriver, ScrollSource};
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Passive scroll listener. Only flags pending work; the frame loop samples.
pub fn wire_scroll<S: ScrollSource + 'static>(
    window: &web::Window,
    driver: Rc<RefCell<ScrollDriver<S>>>,
) -> anyhow::Result<Listener> {
    Listener::new(window, "scroll", true, move |_| {
        // A frame may hold the driver; the next one samples anyway.
        if let Ok(mut d) = driver.try_borrow_mut() {
            d.notify_scroll();
        }
    })
}

/// Keep the canvas backing store at CSS size × devicePixelRatio (capped).
/// Resizing also changes scrollable height, so the driver resamples.
pub fn wire_resize<S: ScrollSource + 'static>(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    driver: Rc<RefCell<ScrollDriver<S>>>,
) -> anyhow::Result<Listener> {
    dom::sync_canvas_backing_size(window, &canvas);
    let win = window.clone();
    Listener::new(window, "resize", true, move |_| {
        if dom::sync_canvas_backing_size(&win, &canvas) {
            log::debug!("[resize] canvas {}x{}", canvas.width(), canvas.height());
        }
        if let Ok(mut d) = driver.try_borrow_mut() {
            d.notify_scroll();
        }
    })
}
