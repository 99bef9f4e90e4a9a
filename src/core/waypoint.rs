use super::palette::rgb_hex;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// Narrative sections of the page, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Contact,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// DOM id of the section element and the `data-section` value of its nav entry.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = WaypointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| WaypointError::UnknownSection(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaypointError {
    #[error("waypoint table needs at least 2 entries, got {0}")]
    TooFewWaypoints(usize),
    #[error("waypoint `{id}` is out of narrative order")]
    OutOfOrder { id: SectionId },
    #[error("waypoint `{id}`: camera distance must be positive, got {value}")]
    InvalidDistance { id: SectionId, value: f32 },
    #[error("waypoint `{id}`: field of view must be positive, got {value}")]
    InvalidFieldOfView { id: SectionId, value: f32 },
    #[error("waypoint `{id}`: ambient intensity must be non-negative, got {value}")]
    InvalidIntensity { id: SectionId, value: f32 },
    #[error("waypoint `{id}`: colour channels must lie in [0, 1]")]
    InvalidColor { id: SectionId },
    #[error("unknown section id `{0}`")]
    UnknownSection(String),
}

/// Keyframe of camera and lighting parameters tied to one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
    pub id: SectionId,
    /// World-space distance of the camera from the origin along +Z.
    pub camera_distance: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    pub background_color: Vec3,
    /// Colour of the key point light.
    pub accent_color: Vec3,
    pub ambient_intensity: f32,
}

impl Waypoint {
    fn validate(&self) -> Result<(), WaypointError> {
        let id = self.id;
        if !(self.camera_distance.is_finite() && self.camera_distance > 0.0) {
            return Err(WaypointError::InvalidDistance {
                id,
                value: self.camera_distance,
            });
        }
        if !(self.field_of_view.is_finite() && self.field_of_view > 0.0) {
            return Err(WaypointError::InvalidFieldOfView {
                id,
                value: self.field_of_view,
            });
        }
        if !(self.ambient_intensity.is_finite() && self.ambient_intensity >= 0.0) {
            return Err(WaypointError::InvalidIntensity {
                id,
                value: self.ambient_intensity,
            });
        }
        let in_unit = |c: Vec3| c.to_array().iter().all(|v| (0.0..=1.0).contains(v));
        if !in_unit(self.background_color) || !in_unit(self.accent_color) {
            return Err(WaypointError::InvalidColor { id });
        }
        Ok(())
    }
}

/// Ordered, validated set of waypoints. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct WaypointTable {
    waypoints: Vec<Waypoint>,
}

impl WaypointTable {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, WaypointError> {
        if waypoints.len() < 2 {
            return Err(WaypointError::TooFewWaypoints(waypoints.len()));
        }
        for w in &waypoints {
            w.validate()?;
        }
        for pair in waypoints.windows(2) {
            if pair[1].id <= pair[0].id {
                return Err(WaypointError::OutOfOrder { id: pair[1].id });
            }
        }
        Ok(Self { waypoints })
    }

    /// Fly-through used on wide viewports.
    pub fn desktop() -> Self {
        Self::from_presets([(8.0, 50.0), (4.0, 60.0), (1.5, 70.0), (3.0, 65.0)])
    }

    /// Gentler, monotonic fly-through for narrow viewports.
    pub fn mobile() -> Self {
        Self::from_presets([(7.0, 50.0), (5.0, 55.0), (3.5, 60.0), (2.0, 65.0)])
    }

    fn from_presets(camera: [(f32, f32); 4]) -> Self {
        let backgrounds = [0x0a0e27, 0x1a1a2e, 0x16213e, 0x0f3460];
        let accents = [0x3498db, 0xe74c3c, 0xf39c12, 0x9b59b6];
        let waypoints = SectionId::ALL
            .iter()
            .zip(camera)
            .map(|(&id, (camera_distance, field_of_view))| Waypoint {
                id,
                camera_distance,
                field_of_view,
                background_color: rgb_hex(backgrounds[id.index()]),
                accent_color: rgb_hex(accents[id.index()]),
                ambient_intensity: if id == SectionId::Home { 0.5 } else { 0.8 },
            })
            .collect();
        // Presets are fixed and in order; they always satisfy `new`'s checks.
        Self { waypoints }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always false: a table holds at least two waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn first(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    #[inline]
    pub fn last(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.waypoints.iter().map(|w| w.id)
    }
}

impl std::ops::Index<usize> for WaypointTable {
    type Output = Waypoint;

    fn index(&self, index: usize) -> &Waypoint {
        &self.waypoints[index]
    }
}
