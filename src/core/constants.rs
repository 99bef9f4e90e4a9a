// Scroll/section tuning shared by the driver and its host-side tests.

// Device detection
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // viewports narrower than this use the mobile table

// Section resolution
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 200.0; // a section activates once its top passes this line

// Easing applied to section-keyed scene colours (sphere, particles)
pub const SECTION_TINT_ALPHA: f32 = 0.05;

// Frames between debug summaries from the driver (~2 s at 60 Hz)
pub const FRAME_LOG_INTERVAL: u64 = 120;
