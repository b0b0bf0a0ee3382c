//! Icon generation: render, encode and write each configured size

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::fonts::{resolve_font, FontSource, GlyphFont, ResolvedFont};
use crate::rendering::{Canvas, GlyphLayout};
use crate::{Error, IconConfig, Result};

/// File name of the icon for `size`, e.g. `icon-192x192.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// A canvas with the glyph drawn, not yet encoded
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub canvas: Canvas,
    pub layout: GlyphLayout,
    pub font: FontSource,
}

/// An icon that has been written to disk
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub size: u32,
    pub file_name: String,
    pub path: PathBuf,
    pub font: FontSource,
    /// Length of the PNG file in bytes
    pub bytes: usize,
    /// Hex-encoded SHA-256 of the PNG file
    pub sha256: String,
}

pub struct IconGenerator {
    config: IconConfig,
}

impl IconGenerator {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IconConfig {
        &self.config
    }

    /// Font size in pixels for an icon of `size`, floored.
    pub fn font_px(&self, size: u32) -> u32 {
        // float-to-int casts saturate, so negative or huge ratios stay in range
        (f64::from(size) * self.config.font_ratio).floor() as u32
    }

    fn resolve_font(&self, size: u32) -> ResolvedFont {
        resolve_font(&self.config.font, self.font_px(size))
    }

    fn layout_with(&self, font: &ResolvedFont, size: u32) -> GlyphLayout {
        GlyphLayout::centered(size, font.text_bbox(&self.config.glyph))
    }

    /// Measure the glyph for `size` and compute its centered origin.
    pub fn layout(&self, size: u32) -> GlyphLayout {
        self.layout_with(&self.resolve_font(size), size)
    }

    /// Draw the icon for `size` in memory.
    pub fn render(&self, size: u32) -> Result<RenderedIcon> {
        let mut canvas = Canvas::new(size, self.config.background)?;
        let font = self.resolve_font(size);
        let layout = self.layout_with(&font, size);
        debug!(
            "icon {}: glyph {}x{} at {:?} ({:?} font)",
            size,
            layout.bbox.width(),
            layout.bbox.height(),
            layout.origin,
            font.source()
        );
        font.draw_text(
            &mut canvas,
            layout.origin,
            &self.config.glyph,
            self.config.foreground,
        );
        Ok(RenderedIcon {
            canvas,
            layout,
            font: font.source(),
        })
    }

    /// Create the output directory and any missing parents. Succeeds if it
    /// already exists.
    pub fn ensure_output_dir(&self) -> Result<&Path> {
        let dir = self.config.output_dir.as_path();
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(dir)
    }

    /// Render `size` and write it into the output directory, replacing any
    /// existing file. The directory must already exist.
    pub fn generate_icon(&self, size: u32) -> Result<GeneratedIcon> {
        let rendered = self.render(size)?;
        let png = rendered.canvas.encode_png()?;

        let file_name = icon_file_name(size);
        let path = self.config.output_dir.join(&file_name);
        fs::write(&path, &png).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        let sha256 = hex::encode(Sha256::digest(&png));
        info!("wrote {} ({} bytes, sha256 {})", path.display(), png.len(), sha256);

        Ok(GeneratedIcon {
            size,
            file_name,
            path,
            font: rendered.font,
            bytes: png.len(),
            sha256,
        })
    }

    /// Generate every configured size in order.
    ///
    /// The output directory is ensured once up front. `on_progress` fires
    /// after each file is written; the first failure stops the run and
    /// leaves earlier files in place.
    pub fn run<F>(&self, mut on_progress: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(&GeneratedIcon),
    {
        self.ensure_output_dir()?;
        let mut icons = Vec::with_capacity(self.config.sizes.len());
        for &size in &self.config.sizes {
            let icon = self.generate_icon(size)?;
            on_progress(&icon);
            icons.push(icon);
        }
        Ok(icons)
    }
}
