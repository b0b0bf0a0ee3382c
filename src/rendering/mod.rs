//! Rendering primitives: the raster canvas and glyph placement

pub mod layout;
pub mod raster;

pub use layout::{center_origin, GlyphBox, GlyphLayout};
pub use raster::Canvas;
