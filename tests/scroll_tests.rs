// Host-side tests for scroll progress sampling.

mod common;

use common::scene_core::*;

#[test]
fn progress_is_ratio_of_offset_to_scrollable_height() {
    let m = ScrollMetrics::new(500.0, 2000.0, 1000.0);
    assert_eq!(m.scrollable_height(), 1000.0);
    assert_eq!(scroll_progress(&m), 0.5);
}

#[test]
fn progress_clamps_to_unit_range() {
    // rubber-band overscroll on either end
    assert_eq!(scroll_progress(&ScrollMetrics::new(-80.0, 2000.0, 1000.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(1300.0, 2000.0, 1000.0)), 1.0);
    for offset in [0.0, 1.0, 333.0, 999.0, 1000.0, 5000.0] {
        let p = scroll_progress(&ScrollMetrics::new(offset, 2000.0, 1000.0));
        assert!((0.0..=1.0).contains(&p), "offset {offset} gave {p}");
    }
}

#[test]
fn unscrollable_document_reports_zero() {
    assert_eq!(scroll_progress(&ScrollMetrics::new(0.0, 800.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(40.0, 600.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::default()), 0.0);
}

#[test]
fn garbage_metrics_report_zero() {
    assert_eq!(scroll_progress(&ScrollMetrics::new(f64::NAN, 2000.0, 1000.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(10.0, f64::INFINITY, 1000.0)), 0.0);
}

#[test]
fn closures_act_as_scroll_sources() {
    let source = || ScrollMetrics::new(250.0, 1500.0, 500.0);
    assert_eq!(scroll_progress(&source.metrics()), 0.25);
}
