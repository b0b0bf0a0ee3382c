//! Iconforge
//!
//! Build-time generator for a web application's icon set: square PNG icons
//! with a solid background and a single centered letter.
//!
//! # Overview
//!
//! - **Fixed defaults**: `IconConfig::default()` produces the 192 and 512 pixel
//!   icons (`#3b82f6` background, white `"B"`) into `public/`
//! - **Total font resolution**: a missing or broken system font silently falls
//!   back to a built-in bitmap font; it never fails the run
//! - **Deterministic output**: the same size and font yield byte-identical PNGs
//!
//! # Example
//!
//! ```no_run
//! use iconforge::{IconConfig, IconGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = IconGenerator::new(IconConfig::default());
//! let icons = generator.run(|icon| println!("Created {}", icon.file_name))?;
//! assert_eq!(icons.len(), 2);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use image::Rgb;

pub mod error;
pub use error::{Error, Result};

pub mod fonts;
pub use fonts::{FontPreference, FontSource};

pub mod rendering;

pub mod generator;
pub use generator::{icon_file_name, GeneratedIcon, IconGenerator, RenderedIcon};

/// Background fill of every icon (`#3b82f6`)
pub const BACKGROUND: Rgb<u8> = Rgb([0x3b, 0x82, 0xf6]);

/// Glyph color (`#ffffff`)
pub const FOREGROUND: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// Icon sizes produced by a default run, in order
pub const DEFAULT_SIZES: [u32; 2] = [192, 512];

/// Configuration for an icon generation run
///
/// The defaults are the icon set the web app ships with. Every field is
/// public so tests and other build scripts can render with other parameters
/// without touching the generator.
///
/// # Examples
///
/// ```
/// let cfg = iconforge::IconConfig::default();
/// assert_eq!(cfg.sizes, vec![192, 512]);
/// assert_eq!(cfg.glyph, "B");
/// ```
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// Square edge lengths, in pixels, processed in order
    pub sizes: Vec<u32>,
    /// Canvas fill color
    pub background: Rgb<u8>,
    /// Glyph color
    pub foreground: Rgb<u8>,
    /// Text drawn in the middle of the icon (a single line)
    pub glyph: String,
    /// Which scalable font to try before the built-in fallback
    pub font: FontPreference,
    /// Font size as a fraction of the icon size (floored to whole pixels)
    pub font_ratio: f64,
    /// Directory the icons are written to, created if absent
    pub output_dir: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            background: BACKGROUND,
            foreground: FOREGROUND,
            glyph: "B".to_string(),
            font: FontPreference::default(),
            font_ratio: 0.4,
            output_dir: PathBuf::from("public"),
        }
    }
}

/// Generate a single default-styled icon of `size` pixels into `output_dir`.
///
/// The directory is created first if needed. Returns the path written.
pub fn generate(size: u32, output_dir: impl Into<PathBuf>) -> Result<PathBuf> {
    let generator = IconGenerator::new(IconConfig {
        sizes: vec![size],
        output_dir: output_dir.into(),
        ..Default::default()
    });
    generator.ensure_output_dir()?;
    Ok(generator.generate_icon(size)?.path)
}
