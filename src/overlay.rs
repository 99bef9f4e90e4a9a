use web_sys as web;

const READOUT_ID: &str = "debug-readout";

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(READOUT_ID) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        } else {
            _ = cl.add_1("hidden");
            // fallback for pages without a .hidden rule
            _ = el.set_attribute("style", "display:none");
        }
    }
}

/// One line per value, matching what the readout panel lays out.
pub fn readout_text(camera_distance: f32, field_of_view: f32, progress: f32, section: &str) -> String {
    format!(
        "Camera Z: {:.2}\nFOV: {:.1}\nScroll: {:.1}%\nSection: {}",
        camera_distance,
        field_of_view,
        progress * 100.0,
        section
    )
}

pub fn update_readout(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(READOUT_ID) {
        el.set_text_content(Some(text));
    }
}
