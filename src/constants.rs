use glam::Vec3;

// Scene and rendering tuning constants for the web frontend.

// Camera
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Sphere
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SEGMENTS: u32 = 32; // longitude and latitude bands
pub const SPHERE_SPIN_X: f32 = 0.3; // radians per second
pub const SPHERE_SPIN_Y: f32 = 0.5;
pub const SPHERE_PULSE_FREQ: f32 = 2.0;
pub const SPHERE_PULSE_AMOUNT: f32 = 0.1; // scale = 1 + sin(freq * t) * amount
pub const SPHERE_EMISSIVE: f32 = 0.5;

// Lights
pub const KEY_LIGHT_POS: Vec3 = Vec3::new(10.0, 10.0, 10.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.5;
pub const RIM_LIGHT_POS: Vec3 = Vec3::new(-10.0, -10.0, -10.0);
pub const RIM_LIGHT_INTENSITY: f32 = 0.8;
pub const RIM_LIGHT_HEX: u32 = 0x9b59b6;

// Particle field
pub const PARTICLE_COUNT: u32 = 1200;
pub const PARTICLE_EXTENT: f32 = 25.0; // edge length of the spawn cube
pub const PARTICLE_SIZE: f32 = 0.06; // world units
pub const PARTICLE_OPACITY: f32 = 0.75;
pub const PARTICLE_SPIN_X: f32 = 0.02;
pub const PARTICLE_SPIN_Y: f32 = 0.05;

// Fog toward the background colour (world units from the camera)
pub const FOG_NEAR: f32 = 8.0;
pub const FOG_FAR: f32 = 20.0;

// Post-processing
pub const BLOOM_STRENGTH: f32 = 0.3;
pub const BLOOM_THRESHOLD: f32 = 0.9;
