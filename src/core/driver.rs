use super::config::{DriverConfig, SampleMode};
use super::constants::FRAME_LOG_INTERVAL;
use super::easing::{EasingRates, LiveVisualState};
use super::interpolate::{interpolate, InterpolatedTarget};
use super::parallax::{look_at_target, ParallaxParams};
use super::scroll::{scroll_progress, ScrollSource};
use super::waypoint::WaypointTable;
use glam::{Vec2, Vec3};

/// Camera/lighting sink written once per frame. The driver is its only writer.
pub trait RenderTarget {
    fn apply_visual_state(&mut self, state: &LiveVisualState);

    /// Point the camera looks at. Targets without a movable look-at ignore it.
    fn set_look_at(&mut self, _target: Vec3) {}
}

/// Per-frame inputs that do not come from scrolling.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub time_sec: f32,
    /// Pointer in normalised device coordinates, +y up.
    pub pointer_ndc: Vec2,
}

/// What the driver computed for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    pub progress: f32,
    /// Whether scroll geometry was read this frame.
    pub sampled: bool,
    pub target: InterpolatedTarget,
    pub live: LiveVisualState,
}

/// Scroll-linked camera and lighting driver.
///
/// Reads progress from `S`, interpolates the waypoint table and eases the
/// live state toward it.
pub struct ScrollDriver<S: ScrollSource> {
    source: S,
    waypoints: WaypointTable,
    rates: EasingRates,
    sample_mode: SampleMode,
    parallax: Option<ParallaxParams>,
    live: LiveVisualState,
    progress: f32,
    target: InterpolatedTarget,
    pending: bool,
    frames: u64,
}

impl<S: ScrollSource> ScrollDriver<S> {
    pub fn new(config: DriverConfig, source: S) -> Self {
        let DriverConfig {
            waypoints,
            rates,
            sample_mode,
            parallax,
            ..
        } = config;
        let live = LiveVisualState::from_waypoint(waypoints.first());
        let target = interpolate(&waypoints, 0.0);
        Self {
            source,
            waypoints,
            rates,
            sample_mode,
            parallax,
            live,
            progress: 0.0,
            target,
            // first frame always samples
            pending: true,
            frames: 0,
        }
    }

    /// Flag that scroll geometry changed. Returns `true` only if no sample was
    /// already pending, so bursts of scroll events schedule one recomputation.
    pub fn notify_scroll(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn live(&self) -> &LiveVisualState {
        &self.live
    }

    #[inline]
    pub fn target(&self) -> &InterpolatedTarget {
        &self.target
    }

    #[inline]
    pub fn waypoints(&self) -> &WaypointTable {
        &self.waypoints
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Re-read scroll geometry and refresh the interpolated target.
    pub fn sample(&mut self) -> f32 {
        self.pending = false;
        self.progress = scroll_progress(&self.source.metrics());
        self.target = interpolate(&self.waypoints, self.progress);
        self.progress
    }

    /// Advance one animation frame and write the result to `render`.
    pub fn frame<R: RenderTarget + ?Sized>(
        &mut self,
        render: &mut R,
        input: FrameInput,
    ) -> FrameSample {
        let sampled = match self.sample_mode {
            SampleMode::EveryFrame => true,
            SampleMode::OnScroll => self.pending,
        };
        if sampled {
            self.sample();
        }
        self.live.step(&self.target, &self.rates);
        render.apply_visual_state(&self.live);
        let look_at = match &self.parallax {
            Some(params) => look_at_target(params, input.pointer_ndc, input.time_sec),
            None => Vec3::ZERO,
        };
        render.set_look_at(look_at);

        self.frames += 1;
        if self.frames % FRAME_LOG_INTERVAL == 0 {
            log::debug!(
                "[driver] progress={:.1}% dist={:.2}->{:.2} fov={:.1}->{:.1} segment={}..{} blend={:.2}",
                self.progress * 100.0,
                self.live.camera_distance,
                self.target.camera_distance,
                self.live.field_of_view,
                self.target.field_of_view,
                self.target.lower_index,
                self.target.upper_index,
                self.target.blend,
            );
        }

        FrameSample {
            progress: self.progress,
            sampled,
            target: self.target,
            live: self.live,
        }
    }
}
