/// Raw scroll geometry as reported by the host page, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset_y,
            document_height,
            viewport_height,
        }
    }

    #[inline]
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }
}

/// Anything that can report the current scroll geometry.
///
/// The browser implementation lives in `dom.rs`; tests feed synthetic values.
pub trait ScrollSource {
    fn metrics(&self) -> ScrollMetrics;
}

impl<F> ScrollSource for F
where
    F: Fn() -> ScrollMetrics,
{
    fn metrics(&self) -> ScrollMetrics {
        self()
    }
}

/// Normalised scroll position in [0, 1].
///
/// A document with no room to scroll (or garbage metrics) reports 0.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f32 {
    let scrollable = metrics.scrollable_height();
    if !(scrollable.is_finite() && metrics.offset_y.is_finite()) || scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.offset_y / scrollable).clamp(0.0, 1.0) as f32
}
