use glam::Vec2;
use web_sys as web;

/// Last known pointer position in normalised device coordinates.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub ndc: Vec2,
    pub inside: bool,
}

impl PointerState {
    /// Parallax input: the pointer while it is over the page, else centre.
    #[inline]
    pub fn parallax_input(&self) -> Vec2 {
        if self.inside {
            self.ndc
        } else {
            Vec2::ZERO
        }
    }
}

/// Client pixels to NDC over a `width`×`height` viewport: x right, y up,
/// both clamped to [-1, 1]. Degenerate viewports map to the centre.
#[inline]
pub fn client_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if !(width > 0.0 && height > 0.0) || !client_x.is_finite() || !client_y.is_finite() {
        return Vec2::ZERO;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -((client_y / height) * 2.0 - 1.0);
    Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0))
}

/// Backing-store pixel ratio ceiling.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Canvas backing size in device pixels for a CSS box, at least 1×1.
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
        pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let px = |css: f64| {
        if css.is_finite() {
            ((css * ratio).round() as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

#[inline]
pub fn pointer_ndc(ev: &web::PointerEvent, window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    client_to_ndc(ev.client_x() as f32, ev.client_y() as f32, w, h)
}
