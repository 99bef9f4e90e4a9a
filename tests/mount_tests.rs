// Host-side tests for the mount lifecycle slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mount {
    include!("../src/mount.rs");
}

use mount::MountSlot;

#[test]
fn mount_then_unmount_hands_back_the_live_scene() {
    let mut slot = MountSlot::default();
    assert!(slot.begin());
    assert_eq!(slot.finish(Some("scene")), None);
    assert!(!slot.begin(), "second mount while live");
    assert_eq!(slot.unmount(), Some("scene"));
    assert_eq!(slot.unmount(), None);
    assert!(slot.begin(), "remount after teardown");
}

#[test]
fn unmount_during_mount_tears_down_on_finish() {
    let mut slot = MountSlot::default();
    assert!(slot.begin());
    assert!(!slot.cancel_requested());

    // host tears the page down while the GPU request is pending
    assert_eq!(slot.unmount(), None);
    assert!(slot.cancel_requested());
    assert_eq!(slot.unmount(), None);

    assert_eq!(slot.finish(Some("scene")), Some("scene"));
    assert!(!slot.cancel_requested());
    assert_eq!(slot.unmount(), None, "nothing left mounted");
    assert!(slot.begin());
}

#[test]
fn failed_mount_returns_to_idle() {
    let mut slot: MountSlot<&str> = MountSlot::default();
    assert!(slot.begin());
    assert!(!slot.begin(), "mount already underway");
    assert_eq!(slot.finish(None), None);
    assert!(slot.begin());
}

#[test]
fn unmount_when_idle_is_a_no_op() {
    let mut slot: MountSlot<u8> = MountSlot::default();
    assert_eq!(slot.unmount(), None);
    assert!(!slot.cancel_requested());
    assert!(slot.begin());
}
