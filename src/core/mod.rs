pub mod config;
pub mod constants;
pub mod driver;
pub mod easing;
pub mod interpolate;
pub mod palette;
pub mod parallax;
pub mod scroll;
pub mod section;
pub mod store;
pub mod waypoint;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use easing::*;
pub use interpolate::*;
pub use palette::*;
pub use scroll::*;
pub use section::*;
pub use store::*;
pub use waypoint::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
