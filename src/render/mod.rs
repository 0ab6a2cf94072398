//! Preview rendering: overlay transform and the per-tick frame pipeline.

pub mod overlay;
pub mod render_loop;
pub mod texture;

pub use overlay::OverlayState;
pub use render_loop::{RenderLoop, RenderState};
pub use texture::frame_to_texture;
