//! Placeholder launcher icon rendering
//!
//! An icon is a Material Blue disc with a white dot and a white ring drawn
//! around the canvas center.

mod geometry;
mod render;

pub use geometry::IconGeometry;
pub use render::{render_icon, write_icon};

/// Background disc color, Material Blue 500
pub const BACKGROUND_COLOR: (u8, u8, u8, u8) = (33, 150, 243, 255);

/// Dot and ring color
pub const FOREGROUND_COLOR: (u8, u8, u8, u8) = (255, 255, 255, 255);
