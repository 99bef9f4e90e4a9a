use super::store::SectionStore;
use super::waypoint::SectionId;
use smallvec::SmallVec;

/// Top edge of a section element relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBoundary {
    pub id: SectionId,
    pub top_px: f64,
}

pub type Boundaries = SmallVec<[SectionBoundary; 4]>;

/// Layout collaborator that reports where each section currently sits.
pub trait SectionGeometry {
    /// Boundaries in document order. Sections missing from the page are skipped.
    fn boundaries(&self) -> Boundaries;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolveStrategy {
    /// Equal progress bands per section.
    Progress,
    /// Last section whose top has crossed `threshold_px` from the viewport top.
    Boundaries { threshold_px: f64 },
}

/// Band index for `progress` when [0, 1] is split into `count` equal bands.
///
/// A boundary value belongs to the lower band, so exactly 0.25 is still the
/// first of four sections.
pub fn progress_band(progress: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let band = (p * count as f32).ceil() as usize;
    band.saturating_sub(1).min(count - 1)
}

pub fn resolve_by_progress(progress: f32, sections: &[SectionId]) -> Option<SectionId> {
    if sections.is_empty() {
        return None;
    }
    Some(sections[progress_band(progress, sections.len())])
}

pub fn resolve_by_boundaries(
    boundaries: &[SectionBoundary],
    threshold_px: f64,
) -> Option<SectionId> {
    let first = boundaries.first()?;
    let active = boundaries
        .iter()
        .rev()
        .find(|b| b.top_px.is_finite() && b.top_px <= threshold_px)
        .unwrap_or(first);
    Some(active.id)
}

/// Maps scroll state to the active section and publishes transitions.
pub struct SectionResolver {
    strategy: ResolveStrategy,
    sections: SmallVec<[SectionId; 4]>,
    last: Option<SectionId>,
}

impl SectionResolver {
    pub fn new(strategy: ResolveStrategy, sections: impl IntoIterator<Item = SectionId>) -> Self {
        Self {
            strategy,
            sections: sections.into_iter().collect(),
            last: None,
        }
    }

    #[inline]
    pub fn strategy(&self) -> ResolveStrategy {
        self.strategy
    }

    /// Active section for this sample, without publishing it.
    ///
    /// The boundary strategy falls back to progress bands when the page
    /// exposes no section geometry.
    pub fn resolve(
        &self,
        progress: f32,
        geometry: Option<&dyn SectionGeometry>,
    ) -> Option<SectionId> {
        match (self.strategy, geometry) {
            (ResolveStrategy::Boundaries { threshold_px }, Some(geometry)) => {
                let boundaries = geometry.boundaries();
                resolve_by_boundaries(&boundaries, threshold_px)
                    .or_else(|| resolve_by_progress(progress, &self.sections))
            }
            _ => resolve_by_progress(progress, &self.sections),
        }
    }

    /// Resolve and write to `store` only if the id changed. Returns the new id
    /// when a transition was published.
    pub fn update(
        &mut self,
        progress: f32,
        geometry: Option<&dyn SectionGeometry>,
        store: &mut SectionStore,
    ) -> Option<SectionId> {
        let id = self.resolve(progress, geometry)?;
        if self.last == Some(id) {
            return None;
        }
        self.last = Some(id);
        if store.set_current(id) {
            log::info!("[section] active -> {}", id);
            Some(id)
        } else {
            None
        }
    }
}
