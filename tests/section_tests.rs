// Host-side tests for section resolution and the section store.

mod common;

use common::scene_core::*;
use std::cell::RefCell;
use std::rc::Rc;

struct FixedLayout(Vec<SectionBoundary>);

impl SectionGeometry for FixedLayout {
    fn boundaries(&self) -> Boundaries {
        self.0.iter().copied().collect()
    }
}

fn layout(tops: [f64; 4]) -> FixedLayout {
    FixedLayout(
        SectionId::ALL
            .iter()
            .zip(tops)
            .map(|(&id, top_px)| SectionBoundary { id, top_px })
            .collect(),
    )
}

fn recording_store() -> (SectionStore, Rc<RefCell<Vec<(SectionId, Option<SectionId>)>>>) {
    let mut store = SectionStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |current, previous| sink.borrow_mut().push((current, previous)));
    (store, seen)
}

#[test]
fn progress_bands_put_boundaries_in_the_lower_section() {
    assert_eq!(progress_band(0.0, 4), 0);
    assert_eq!(progress_band(0.25, 4), 0);
    assert_eq!(progress_band(0.26, 4), 1);
    assert_eq!(progress_band(0.5, 4), 1);
    assert_eq!(progress_band(0.51, 4), 2);
    assert_eq!(progress_band(0.75, 4), 2);
    assert_eq!(progress_band(0.76, 4), 3);
    assert_eq!(progress_band(1.0, 4), 3);
    assert_eq!(progress_band(2.0, 4), 3);
    assert_eq!(progress_band(0.3, 0), 0);
}

#[test]
fn jitter_inside_one_section_notifies_once() {
    let (mut store, seen) = recording_store();
    let mut resolver = SectionResolver::new(ResolveStrategy::Progress, SectionId::ALL);
    for p in [0.10, 0.12, 0.11] {
        resolver.update(p, None, &mut store);
    }
    assert_eq!(*seen.borrow(), vec![(SectionId::Home, None)]);
    assert_eq!(store.transitions(), 1);
}

#[test]
fn crossing_sections_reports_previous() {
    let (mut store, seen) = recording_store();
    let mut resolver = SectionResolver::new(ResolveStrategy::Progress, SectionId::ALL);
    let published: Vec<_> = [0.1, 0.3, 0.3, 0.6, 0.45]
        .into_iter()
        .map(|p| resolver.update(p, None, &mut store))
        .collect();
    assert_eq!(
        published,
        vec![
            Some(SectionId::Home),
            Some(SectionId::About),
            None,
            Some(SectionId::Projects),
            Some(SectionId::About),
        ]
    );
    assert_eq!(
        seen.borrow().last(),
        Some(&(SectionId::About, Some(SectionId::Projects)))
    );
    assert_eq!(store.current(), Some(SectionId::About));
    assert_eq!(store.previous(), Some(SectionId::Projects));
}

#[test]
fn boundary_strategy_picks_last_section_past_threshold() {
    let resolver = SectionResolver::new(
        ResolveStrategy::Boundaries { threshold_px: 200.0 },
        SectionId::ALL,
    );
    let geometry = layout([-1200.0, -300.0, 150.0, 900.0]);
    // progress would say otherwise; geometry wins when present
    assert_eq!(resolver.resolve(0.05, Some(&geometry)), Some(SectionId::Projects));

    let at_line = layout([-900.0, 200.0, 1000.0, 1800.0]);
    assert_eq!(resolver.resolve(0.0, Some(&at_line)), Some(SectionId::About));
}

#[test]
fn boundary_strategy_defaults_to_first_section_at_top_of_page() {
    let geometry = layout([260.0, 1100.0, 1900.0, 2700.0]);
    assert_eq!(resolve_by_boundaries(&geometry.boundaries(), 200.0), Some(SectionId::Home));
    assert_eq!(resolve_by_boundaries(&[], 200.0), None);
}

#[test]
fn boundary_strategy_skips_non_finite_tops() {
    let geometry = layout([-500.0, f64::NAN, f64::NAN, 900.0]);
    assert_eq!(resolve_by_boundaries(&geometry.boundaries(), 200.0), Some(SectionId::Home));
}

#[test]
fn boundary_strategy_falls_back_to_progress_without_geometry() {
    let resolver = SectionResolver::new(
        ResolveStrategy::Boundaries { threshold_px: 200.0 },
        SectionId::ALL,
    );
    assert_eq!(resolver.resolve(0.9, None), Some(SectionId::Contact));
    let empty = FixedLayout(Vec::new());
    assert_eq!(resolver.resolve(0.6, Some(&empty)), Some(SectionId::Projects));
}

#[test]
fn resolver_with_no_sections_resolves_nothing() {
    let (mut store, seen) = recording_store();
    let mut resolver = SectionResolver::new(ResolveStrategy::Progress, Vec::new());
    assert_eq!(resolver.update(0.5, None, &mut store), None);
    assert!(seen.borrow().is_empty());
    assert_eq!(store.current_or_home(), SectionId::Home);
}

#[test]
fn store_ignores_repeated_values() {
    let (mut store, seen) = recording_store();
    assert_eq!(store.current(), None);
    assert!(store.set_current(SectionId::Contact));
    assert!(!store.set_current(SectionId::Contact));
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(store.previous(), None);
}

#[test]
fn unsubscribed_listeners_stop_receiving() {
    let mut store = SectionStore::new();
    let hits = Rc::new(RefCell::new(0u32));
    let h = hits.clone();
    let id = store.subscribe(move |_, _| *h.borrow_mut() += 1);
    store.set_current(SectionId::About);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_current(SectionId::Projects);
    assert_eq!(*hits.borrow(), 1);

    let h = hits.clone();
    store.subscribe(move |_, _| *h.borrow_mut() += 1);
    store.clear_listeners();
    store.set_current(SectionId::Home);
    assert_eq!(*hits.borrow(), 1);
    assert_eq!(store.transitions(), 3);
}
