use super::constants::{MOBILE_BREAKPOINT_PX, SECTION_ACTIVATION_OFFSET_PX};
use super::easing::{EasingError, EasingRates};
use super::parallax::ParallaxParams;
use super::section::ResolveStrategy;
use super::waypoint::WaypointTable;

/// Facts about the host device, gathered by the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceCapabilities {
    pub viewport_width: f64,
    pub prefers_reduced_motion: bool,
    /// Explicit opt-in to the cheap path, e.g. a `?lowpower` query flag.
    pub low_power_hint: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceProfile {
    Desktop,
    Mobile,
    LowPower,
}

impl DeviceProfile {
    pub fn detect(caps: &DeviceCapabilities) -> Self {
        if caps.low_power_hint || caps.prefers_reduced_motion {
            DeviceProfile::LowPower
        } else if caps.viewport_width > 0.0 && caps.viewport_width < MOBILE_BREAKPOINT_PX {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeviceProfile::Desktop => "desktop",
            DeviceProfile::Mobile => "mobile",
            DeviceProfile::LowPower => "low-power",
        }
    }
}

/// When the driver re-reads scroll geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleMode {
    /// Poll on every animation frame.
    EveryFrame,
    /// Only after a scroll event flagged pending work.
    OnScroll,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    pub waypoints: WaypointTable,
    pub rates: EasingRates,
    pub sample_mode: SampleMode,
    pub resolve_strategy: ResolveStrategy,
    /// `None` disables pointer parallax and idle drift.
    pub parallax: Option<ParallaxParams>,
}

impl DriverConfig {
    pub fn for_profile(profile: DeviceProfile) -> Self {
        let boundaries = ResolveStrategy::Boundaries {
            threshold_px: SECTION_ACTIVATION_OFFSET_PX,
        };
        match profile {
            DeviceProfile::Desktop => Self {
                waypoints: WaypointTable::desktop(),
                rates: EasingRates::smooth(),
                sample_mode: SampleMode::EveryFrame,
                resolve_strategy: boundaries,
                parallax: Some(ParallaxParams::default()),
            },
            DeviceProfile::Mobile => Self {
                waypoints: WaypointTable::mobile(),
                rates: EasingRates::smooth(),
                sample_mode: SampleMode::EveryFrame,
                resolve_strategy: boundaries,
                parallax: Some(ParallaxParams::default()),
            },
            DeviceProfile::LowPower => Self {
                waypoints: WaypointTable::mobile(),
                rates: EasingRates::snappy(),
                sample_mode: SampleMode::OnScroll,
                resolve_strategy: ResolveStrategy::Progress,
                parallax: None,
            },
        }
    }

    pub fn with_rates(mut self, rates: EasingRates) -> Result<Self, EasingError> {
        rates.validate()?;
        self.rates = rates;
        Ok(self)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::for_profile(DeviceProfile::Desktop)
    }
}
