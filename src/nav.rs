use crate::core::{SectionId, SectionPalette, SectionStore, SubscriptionId};
use glam::Vec3;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn css_rgb(c: Vec3) -> String {
    let c = (c.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    format!("rgb({}, {}, {})", c.x as u8, c.y as u8, c.z as u8)
}

fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn mark_active_links(document: &web::Document, current: SectionId) {
    let Ok(nodes) = document.query_selector_all("[data-section]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let linked = el
            .get_attribute("data-section")
            .and_then(|id| id.parse::<SectionId>().ok());
        let cl = el.class_list();
        if linked == Some(current) {
            _ = cl.add_1("active");
        } else {
            _ = cl.remove_1("active");
        }
    }
}

fn apply_section(document: &web::Document, current: SectionId) {
    mark_active_links(document, current);
    if let Some(el) = document.get_element_by_id("nav-status") {
        el.set_text_content(Some(&current.as_str().to_uppercase()));
    }
    if let Some(hint) = html_element(document, "scroll-hint") {
        let opacity = if current == SectionId::Home { "1" } else { "0" };
        _ = hint.style().set_property("opacity", opacity);
    }
}

/// Navigation, status and scroll hint follow the store. Applies the current
/// section immediately if one is already set.
pub fn subscribe_section_consumers(
    document: &web::Document,
    store: &mut SectionStore,
) -> SubscriptionId {
    if let Some(current) = store.current() {
        apply_section(document, current);
    }
    let document = document.clone();
    store.subscribe(move |current, previous| {
        log::debug!("[nav] {:?} -> {}", previous, current);
        apply_section(&document, current);
    })
}

/// `#scroll-progress` bar: width tracks progress, glow follows the section.
pub struct ProgressBar {
    el: Option<web::HtmlElement>,
    palette: SectionPalette,
    last_width: f32,
    last_section: Option<SectionId>,
}

impl ProgressBar {
    pub fn new(document: &web::Document, palette: SectionPalette) -> Self {
        Self {
            el: html_element(document, "scroll-progress"),
            palette,
            last_width: -1.0,
            last_section: None,
        }
    }

    pub fn update(&mut self, progress: f32, section: SectionId) {
        let Some(el) = &self.el else {
            return;
        };
        let width = (progress.clamp(0.0, 1.0) * 100.0 * 10.0).round() / 10.0;
        let style = el.style();
        if width != self.last_width {
            self.last_width = width;
            _ = style.set_property("width", &format!("{}%", width));
        }
        if self.last_section != Some(section) {
            self.last_section = Some(section);
            let glow = css_rgb(self.palette.color(section));
            _ = style.set_property("background-color", &glow);
            _ = style.set_property("box-shadow", &format!("0 0 12px {}", glow));
        }
    }
}
