//! Font resolution: a preferred scalable font with a built-in fallback
//!
//! [`resolve_font`] is total. Whatever goes wrong while locating or parsing
//! the preferred font, the caller receives the built-in bitmap font instead
//! and can tell the two apart only through [`ResolvedFont::source`].

use std::path::PathBuf;

use image::Rgb;
use log::debug;
use thiserror::Error;

use crate::rendering::{Canvas, GlyphBox};

pub mod builtin;
pub mod scalable;

pub use builtin::BuiltinFont;
pub use scalable::ScalableFont;
#[cfg(feature = "system-fonts")]
pub use scalable::system_database;

/// Something that can measure and draw a single line of text.
pub trait GlyphFont {
    /// Ink bounding box of `text` drawn with its origin at (0, 0).
    fn text_bbox(&self, text: &str) -> GlyphBox;

    /// Draw `text` with the line box's top-left corner at `origin`.
    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Rgb<u8>);
}

/// Where to look for the preferred scalable font
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontPreference {
    /// Installed system families, tried in order
    Families(Vec<String>),
    /// A TrueType/OpenType file on disk
    Path(PathBuf),
}

impl Default for FontPreference {
    fn default() -> Self {
        // Liberation Sans and Arimo are metric-compatible with Arial
        FontPreference::Families(
            ["Arial", "Liberation Sans", "Arimo"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

/// Which font ended up drawing the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSource {
    Loaded,
    Fallback,
}

/// Reasons the preferred font could not be used. Never leaves this module
/// as an error; it only selects the fallback.
#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("font size rounds down to zero pixels")]
    ZeroSize,

    #[error("no installed font matches {0}")]
    NotFound(String),

    #[error("system font discovery is not compiled in")]
    DiscoveryUnavailable,

    #[error("failed to read font file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font data could not be parsed")]
    Parse,
}

/// The outcome of [`resolve_font`]
pub enum ResolvedFont {
    Loaded(ScalableFont),
    Fallback(BuiltinFont),
}

impl ResolvedFont {
    pub fn source(&self) -> FontSource {
        match self {
            ResolvedFont::Loaded(_) => FontSource::Loaded,
            ResolvedFont::Fallback(_) => FontSource::Fallback,
        }
    }
}

impl GlyphFont for ResolvedFont {
    fn text_bbox(&self, text: &str) -> GlyphBox {
        match self {
            ResolvedFont::Loaded(f) => f.text_bbox(text),
            ResolvedFont::Fallback(f) => f.text_bbox(text),
        }
    }

    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        match self {
            ResolvedFont::Loaded(f) => f.draw_text(canvas, origin, text, color),
            ResolvedFont::Fallback(f) => f.draw_text(canvas, origin, text, color),
        }
    }
}

/// Load the preferred font at `px` pixels per em, or the built-in font.
pub fn resolve_font(preference: &FontPreference, px: u32) -> ResolvedFont {
    match ScalableFont::load(preference, px) {
        Ok(font) => {
            debug!("using font {} at {}px", font.name(), px);
            ResolvedFont::Loaded(font)
        }
        Err(_) => ResolvedFont::Fallback(BuiltinFont::new()),
    }
}
