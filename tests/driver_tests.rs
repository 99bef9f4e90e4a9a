// Host-side tests for the scroll driver, using a synthetic scroll source
// and a recording render target.

mod common;

use common::scene_core::*;
use common::{approx, EPS};
use glam::{Vec2, Vec3};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingTarget {
    applied: Vec<LiveVisualState>,
    look_at: Option<Vec3>,
}

impl RenderTarget for RecordingTarget {
    fn apply_visual_state(&mut self, state: &LiveVisualState) {
        self.applied.push(*state);
    }

    fn set_look_at(&mut self, target: Vec3) {
        self.look_at = Some(target);
    }
}

/// Page with 1000 px of scroll room; returns the offset handle.
fn page(config: DriverConfig) -> (ScrollDriver<impl ScrollSource>, Rc<Cell<f64>>) {
    let offset = Rc::new(Cell::new(0.0));
    let o = offset.clone();
    let source = move || ScrollMetrics::new(o.get(), 2000.0, 1000.0);
    (ScrollDriver::new(config, source), offset)
}

#[test]
fn starts_at_the_first_waypoint() {
    let (driver, _) = page(DriverConfig::default());
    let first = driver.waypoints().first();
    assert_eq!(driver.live().camera_distance, first.camera_distance);
    assert_eq!(driver.live().field_of_view, first.field_of_view);
    assert!(driver.is_pending());
}

#[test]
fn frame_eases_toward_scroll_target_and_writes_render_target() {
    let (mut driver, offset) = page(DriverConfig::default());
    let mut target = RecordingTarget::default();
    offset.set(500.0);

    let sample = driver.frame(&mut target, FrameInput::default());
    assert!(sample.sampled);
    assert_eq!(sample.progress, 0.5);
    assert!(approx(sample.target.camera_distance, 2.75, EPS));
    assert!(approx(sample.target.field_of_view, 65.0, EPS));
    assert!(approx(sample.live.camera_distance, 8.0 + (2.75 - 8.0) * 0.03, EPS));
    assert_eq!(target.applied.len(), 1);
    assert_eq!(target.applied[0], sample.live);

    for _ in 0..1000 {
        driver.frame(&mut target, FrameInput::default());
    }
    assert!(approx(driver.live().camera_distance, 2.75, 1e-3));
    assert!(approx(driver.live().field_of_view, 65.0, 1e-3));
    assert_eq!(driver.frames(), 1001);
}

#[test]
fn scroll_notifications_coalesce_until_sampled() {
    let (mut driver, _) = page(DriverConfig::default());
    driver.sample();
    assert!(!driver.is_pending());
    assert!(driver.notify_scroll());
    assert!(!driver.notify_scroll());
    assert!(!driver.notify_scroll());
    driver.sample();
    assert!(driver.notify_scroll());
}

#[test]
fn on_scroll_mode_samples_only_when_flagged() {
    let (mut driver, offset) = page(DriverConfig::for_profile(DeviceProfile::LowPower));
    let mut target = RecordingTarget::default();

    let first = driver.frame(&mut target, FrameInput::default());
    assert!(first.sampled);
    assert_eq!(first.progress, 0.0);

    offset.set(1000.0);
    let stale = driver.frame(&mut target, FrameInput::default());
    assert!(!stale.sampled);
    assert_eq!(stale.progress, 0.0);
    // easing still runs every frame
    assert_eq!(target.applied.len(), 2);

    driver.notify_scroll();
    let fresh = driver.frame(&mut target, FrameInput::default());
    assert!(fresh.sampled);
    assert_eq!(fresh.progress, 1.0);
    assert_eq!(fresh.target.camera_distance, driver.waypoints().last().camera_distance);
}

#[test]
fn every_frame_mode_ignores_the_pending_flag() {
    let (mut driver, offset) = page(DriverConfig::default());
    let mut target = RecordingTarget::default();
    driver.frame(&mut target, FrameInput::default());
    offset.set(250.0);
    let sample = driver.frame(&mut target, FrameInput::default());
    assert!(sample.sampled);
    assert_eq!(sample.progress, 0.25);
}

#[test]
fn parallax_offsets_look_at_from_pointer_and_time() {
    let (mut driver, _) = page(DriverConfig::default());
    let mut target = RecordingTarget::default();
    driver.frame(
        &mut target,
        FrameInput {
            time_sec: 0.0,
            pointer_ndc: Vec2::new(1.0, 0.0),
        },
    );
    let look = target.look_at.expect("look-at written");
    assert!(approx(look.x, 0.2, EPS));
    assert!(approx(look.y, 0.01, EPS));
    assert_eq!(look.z, 0.0);
}

#[test]
fn low_power_profile_keeps_camera_centred() {
    let (mut driver, _) = page(DriverConfig::for_profile(DeviceProfile::LowPower));
    let mut target = RecordingTarget::default();
    driver.frame(
        &mut target,
        FrameInput {
            time_sec: 3.0,
            pointer_ndc: Vec2::new(-1.0, 1.0),
        },
    );
    assert_eq!(target.look_at, Some(Vec3::ZERO));
}

#[test]
fn short_document_holds_the_first_waypoint() {
    let source = || ScrollMetrics::new(120.0, 600.0, 900.0);
    let mut driver = ScrollDriver::new(DriverConfig::default(), source);
    let mut target = RecordingTarget::default();
    for _ in 0..10 {
        driver.frame(&mut target, FrameInput::default());
    }
    assert_eq!(driver.progress(), 0.0);
    assert_eq!(driver.live().camera_distance, 8.0);
    assert_eq!(driver.target().lower_index, 0);
}
