use glam::{Vec2, Vec3};

/// Gains for the idle look-at drift layered over pointer parallax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub pointer_gain: f32,
    pub float_amplitude: f32,
    pub float_freq_x: f32,
    pub float_freq_y: f32,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            pointer_gain: 0.2,
            float_amplitude: 0.01,
            float_freq_x: 0.2,
            float_freq_y: 0.3,
        }
    }
}

/// Point the camera looks at, given the pointer in NDC ([-1, 1], +y up)
/// and elapsed seconds.
pub fn look_at_target(params: &ParallaxParams, pointer_ndc: Vec2, time_sec: f32) -> Vec3 {
    let float_x = (time_sec * params.float_freq_x).sin() * params.float_amplitude;
    let float_y = (time_sec * params.float_freq_y).cos() * params.float_amplitude;
    let p = pointer_ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    Vec3::new(
        p.x * params.pointer_gain + float_x,
        p.y * params.pointer_gain + float_y,
        0.0,
    )
}
