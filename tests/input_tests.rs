// Host-side tests for pure pointer and readout helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_corners_map_to_ndc_corners() {
    assert_eq!(client_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn client_outside_viewport_is_clamped() {
    assert_eq!(client_to_ndc(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
}

#[test]
fn degenerate_viewport_maps_to_centre() {
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(client_to_ndc(f32::NAN, 10.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn pointer_outside_page_recentres_parallax() {
    let mut p = PointerState {
        ndc: Vec2::new(0.5, -0.25),
        inside: true,
    };
    assert_eq!(p.parallax_input(), Vec2::new(0.5, -0.25));
    p.inside = false;
    assert_eq!(p.parallax_input(), Vec2::ZERO);
    assert_eq!(PointerState::default().parallax_input(), Vec2::ZERO);
}

#[test]
fn readout_lists_camera_and_scroll() {
    let text = overlay::readout_text(2.75, 65.0, 0.5, "projects");
    assert_eq!(
        text,
        "Camera Z: 2.75\nFOV: 65.0\nScroll: 50.0%\nSection: projects"
    );
}

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(800.0, 600.0, 1.0), (800, 600));
    assert_eq!(backing_size(800.0, 600.0, 1.5), (1200, 900));
    assert_eq!(backing_size(400.0, 300.0, 3.0), (800, 600));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(f64::NAN, 300.0, f64::NAN), (1, 300));
}
