use rand::prelude::*;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Per-instance particle data: xyz position and a phase in [0, 1) used for twinkle.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position_phase: [f32; 4],
}

/// Latitude/longitude sphere centred on the origin.
///
/// Produces `(segments + 1)^2` vertices and `segments^2 * 6` indices with
/// counter-clockwise front faces seen from outside.
pub fn uv_sphere(radius: f32, segments: u32) -> (Vec<MeshVertex>, Vec<u32>) {
    let segments = segments.max(3);
    let ring = segments + 1;
    let mut vertices = Vec::with_capacity((ring * ring) as usize);
    for lat in 0..=segments {
        let theta = lat as f32 / segments as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for lon in 0..=segments {
            let phi = lon as f32 / segments as f32 * 2.0 * PI;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = [sin_t * cos_p, cos_t, -sin_t * sin_p];
            vertices.push(MeshVertex {
                position: [n[0] * radius, n[1] * radius, n[2] * radius],
                normal: n,
            });
        }
    }
    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    for lat in 0..segments {
        for lon in 0..segments {
            let a = lat * ring + lon;
            let b = a + ring;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    (vertices, indices)
}

/// Particles scattered uniformly inside a cube of edge `extent` centred on the origin.
pub fn particle_field(count: u32, extent: f32, seed: u64) -> Vec<ParticleInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = extent * 0.5;
    (0..count)
        .map(|_| ParticleInstance {
            position_phase: [
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen::<f32>(),
            ],
        })
        .collect()
}
