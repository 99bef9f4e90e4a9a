use super::interpolate::InterpolatedTarget;
use super::waypoint::Waypoint;
use glam::Vec3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EasingError {
    #[error("easing factor for {field} must lie in (0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

/// Per-frame easing factors. Higher is snappier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasingRates {
    pub distance: f32,
    pub field_of_view: f32,
    pub color: f32,
    pub intensity: f32,
}

impl EasingRates {
    pub fn new(
        distance: f32,
        field_of_view: f32,
        color: f32,
        intensity: f32,
    ) -> Result<Self, EasingError> {
        let rates = Self {
            distance,
            field_of_view,
            color,
            intensity,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Slow, cinematic settle used on desktop.
    pub fn smooth() -> Self {
        Self {
            distance: 0.03,
            field_of_view: 0.05,
            color: 0.03,
            intensity: 0.03,
        }
    }

    /// Faster convergence for constrained devices.
    pub fn snappy() -> Self {
        Self {
            distance: 0.12,
            field_of_view: 0.15,
            color: 0.1,
            intensity: 0.1,
        }
    }

    pub fn validate(&self) -> Result<(), EasingError> {
        for (field, value) in [
            ("distance", self.distance),
            ("field_of_view", self.field_of_view),
            ("color", self.color),
            ("intensity", self.intensity),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(EasingError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

impl Default for EasingRates {
    fn default() -> Self {
        Self::smooth()
    }
}

/// One exponential smoothing step. Never overshoots for `alpha` in (0, 1].
#[inline]
pub fn ease_toward(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

#[inline]
pub fn ease_color_toward(current: Vec3, target: Vec3, alpha: f32) -> Vec3 {
    current + (target - current) * alpha
}

/// Camera and lighting values currently presented on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveVisualState {
    pub camera_distance: f32,
    pub field_of_view: f32,
    pub background_color: Vec3,
    pub light_color: Vec3,
    pub ambient_intensity: f32,
}

impl LiveVisualState {
    pub fn from_waypoint(w: &Waypoint) -> Self {
        Self {
            camera_distance: w.camera_distance,
            field_of_view: w.field_of_view,
            background_color: w.background_color,
            light_color: w.accent_color,
            ambient_intensity: w.ambient_intensity,
        }
    }

    pub fn step(&mut self, target: &InterpolatedTarget, rates: &EasingRates) {
        self.camera_distance =
            ease_toward(self.camera_distance, target.camera_distance, rates.distance);
        self.field_of_view =
            ease_toward(self.field_of_view, target.field_of_view, rates.field_of_view);
        self.background_color =
            ease_color_toward(self.background_color, target.background_color, rates.color);
        self.light_color = ease_color_toward(self.light_color, target.light_color, rates.color);
        self.ambient_intensity = ease_toward(
            self.ambient_intensity,
            target.ambient_intensity,
            rates.intensity,
        );
    }

    /// Largest remaining gap to `target` over the scalar fields.
    pub fn max_scalar_gap(&self, target: &InterpolatedTarget) -> f32 {
        (self.camera_distance - target.camera_distance)
            .abs()
            .max((self.field_of_view - target.field_of_view).abs())
            .max((self.ambient_intensity - target.ambient_intensity).abs())
    }
}
