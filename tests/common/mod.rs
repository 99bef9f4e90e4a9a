// Shared host-side view of the scroll driver core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.
#![allow(dead_code, unused_imports)]

pub mod scene_core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod driver {
        include!("../../src/core/driver.rs");
    }
    pub mod easing {
        include!("../../src/core/easing.rs");
    }
    pub mod interpolate {
        include!("../../src/core/interpolate.rs");
    }
    pub mod palette {
        include!("../../src/core/palette.rs");
    }
    pub mod parallax {
        include!("../../src/core/parallax.rs");
    }
    pub mod scroll {
        include!("../../src/core/scroll.rs");
    }
    pub mod section {
        include!("../../src/core/section.rs");
    }
    pub mod store {
        include!("../../src/core/store.rs");
    }
    pub mod waypoint {
        include!("../../src/core/waypoint.rs");
    }

    pub use config::*;
    pub use constants::*;
    pub use driver::*;
    pub use easing::*;
    pub use interpolate::*;
    pub use palette::*;
    pub use parallax::*;
    pub use scroll::*;
    pub use section::*;
    pub use store::*;
    pub use waypoint::*;
}

pub const EPS: f32 = 1e-5;

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
