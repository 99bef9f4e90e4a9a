use super::waypoint::WaypointTable;
use glam::Vec3;

/// Linear interpolation, exact at both `t = 0` and `t = 1`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Per-channel linear blend of two RGB colours.
#[inline]
pub fn lerp_color(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Visual state the scroll position asks for this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InterpolatedTarget {
    pub lower_index: usize,
    pub upper_index: usize,
    pub blend: f32,
    pub camera_distance: f32,
    pub field_of_view: f32,
    pub background_color: Vec3,
    pub light_color: Vec3,
    pub ambient_intensity: f32,
}

/// Split `progress` into the bounding waypoint pair and the blend between them.
///
/// `lower` never exceeds `len - 2`, so `progress = 1` maps to the last
/// interval with `blend = 1` instead of a zero-width interval.
pub fn bounding_indices(progress: f32, len: usize) -> (usize, usize, f32) {
    debug_assert!(len >= 2);
    let last_interval = len.saturating_sub(2);
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let scaled = p * (len - 1) as f32;
    let lower = (scaled.floor() as usize).min(last_interval);
    let blend = (scaled - lower as f32).clamp(0.0, 1.0);
    (lower, lower + 1, blend)
}

/// Piecewise-linear sample of the waypoint table at `progress`.
pub fn interpolate(table: &WaypointTable, progress: f32) -> InterpolatedTarget {
    let (lower_index, upper_index, blend) = bounding_indices(progress, table.len());
    let a = &table[lower_index];
    let b = &table[upper_index];
    InterpolatedTarget {
        lower_index,
        upper_index,
        blend,
        camera_distance: lerp(a.camera_distance, b.camera_distance, blend),
        field_of_view: lerp(a.field_of_view, b.field_of_view, blend),
        background_color: lerp_color(a.background_color, b.background_color, blend),
        light_color: lerp_color(a.accent_color, b.accent_color, blend),
        ambient_intensity: lerp(a.ambient_intensity, b.ambient_intensity, blend),
    }
}
