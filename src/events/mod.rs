pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_debug_toggle;
pub use pointer::wire_pointer_tracking;
pub use scroll::{wire_resize, wire_scroll};
