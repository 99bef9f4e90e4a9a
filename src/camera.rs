use glam::{Mat4, Vec3};

/// Camera on the +Z axis looking at a (possibly drifting) point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub distance: f32,
    pub fov_degrees: f32,
    pub look_at: Vec3,
}

/// Orthonormal view basis, used to face particle billboards at the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBasis {
    pub eye: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl OrbitCamera {
    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.distance)
    }

    pub fn basis(&self) -> CameraBasis {
        let eye = self.eye();
        let forward = (self.look_at - eye).normalize_or(Vec3::NEG_Z);
        let right = forward.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(forward);
        CameraBasis {
            eye,
            right,
            up,
            forward,
        }
    }

    /// Right-handed view-projection; `aspect` falls back to 1 when degenerate.
    pub fn view_proj(&self, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        let view = Mat4::look_at_rh(self.eye(), self.look_at, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, znear, zfar);
        proj * view
    }
}
