use crate::core::{
    Boundaries, DeviceCapabilities, ScrollMetrics, ScrollSource, SectionBoundary, SectionGeometry,
    SectionId,
};
use crate::input::backing_size;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Match the canvas backing store to its CSS box. Returns `true` if it changed.
pub fn sync_canvas_backing_size(window: &web::Window, canvas: &web::HtmlCanvasElement) -> bool {
    let rect = canvas.get_bounding_client_rect();
    let (width, height) = backing_size(rect.width(), rect.height(), window.device_pixel_ratio());
    if canvas.width() == width && canvas.height() == height {
        return false;
    }
    canvas.set_width(width);
    canvas.set_height(height);
    true
}

#[inline]
fn js_f64(v: Result<JsValue, JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// `true` if the page URL carries `?flag` or `&flag` in its query string.
pub fn has_query_flag(window: &web::Window, flag: &str) -> bool {
    window
        .location()
        .search()
        .map(|s| {
            s.trim_start_matches('?')
                .split('&')
                .any(|kv| kv.split('=').next() == Some(flag))
        })
        .unwrap_or(false)
}

pub fn device_capabilities(window: &web::Window) -> DeviceCapabilities {
    let prefers_reduced_motion = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    DeviceCapabilities {
        viewport_width: js_f64(window.inner_width()),
        prefers_reduced_motion,
        low_power_hint: has_query_flag(window, "lowpower"),
    }
}

/// Document scroll position read straight from the window.
pub struct BrowserScroll {
    window: web::Window,
}

impl BrowserScroll {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl ScrollSource for BrowserScroll {
    fn metrics(&self) -> ScrollMetrics {
        let document_height = self
            .window
            .document()
            .and_then(|d| d.document_element())
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        ScrollMetrics::new(
            self.window.scroll_y().unwrap_or(0.0),
            document_height,
            js_f64(self.window.inner_height()),
        )
    }
}

/// Viewport-relative tops of the `<section id=...>` elements.
pub struct DomSections {
    document: web::Document,
    ids: Vec<SectionId>,
}

impl DomSections {
    pub fn new(document: web::Document, ids: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            document,
            ids: ids.into_iter().collect(),
        }
    }
}

impl SectionGeometry for DomSections {
    /// Sections missing from the page are skipped.
    fn boundaries(&self) -> Boundaries {
        self.ids
            .iter()
            .filter_map(|&id| {
                let el = self.document.get_element_by_id(id.as_str())?;
                Some(SectionBoundary {
                    id,
                    top_px: el.get_bounding_client_rect().top(),
                })
            })
            .collect()
    }
}

/// An attached event listener; detaches itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
