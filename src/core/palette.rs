use super::easing::EasingError;
use super::waypoint::SectionId;
use glam::Vec3;

/// Convert a `0xRRGGBB` literal into linear-ish RGB in [0, 1].
#[inline]
pub fn rgb_hex(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32;
    let g = ((hex >> 8) & 0xff) as f32;
    let b = (hex & 0xff) as f32;
    Vec3::new(r, g, b) / 255.0
}

/// Per-section colours used by scene objects that follow `currentSection`
/// rather than the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionPalette {
    colors: [Vec3; 4],
}

impl SectionPalette {
    /// Sphere base and emissive colour.
    pub fn sphere() -> Self {
        Self::from_hex([0x3498db, 0xe74c3c, 0xf39c12, 0x9b59b6])
    }

    /// Particle field and glow shell colour.
    pub fn particles() -> Self {
        Self::from_hex([0x4da3ff, 0xff6b6b, 0xf7b733, 0xc77dff])
    }

    fn from_hex(hex: [u32; 4]) -> Self {
        Self {
            colors: hex.map(rgb_hex),
        }
    }

    #[inline]
    pub fn color(&self, section: SectionId) -> Vec3 {
        self.colors[section.index()]
    }
}

/// Colour that eases toward the palette entry of the current section.
#[derive(Clone, Copy, Debug)]
pub struct SectionTint {
    palette: SectionPalette,
    current: Vec3,
    alpha: f32,
}

impl SectionTint {
    /// `alpha` is a per-frame easing factor in (0, 1].
    pub fn new(
        palette: SectionPalette,
        initial: SectionId,
        alpha: f32,
    ) -> Result<Self, EasingError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(EasingError::OutOfRange {
                field: "section_tint",
                value: alpha,
            });
        }
        Ok(Self {
            palette,
            current: palette.color(initial),
            alpha,
        })
    }

    pub fn step(&mut self, section: SectionId) -> Vec3 {
        let target = self.palette.color(section);
        self.current += (target - self.current) * self.alpha;
        self.current
    }

    #[inline]
    pub fn current(&self) -> Vec3 {
        self.current
    }
}
