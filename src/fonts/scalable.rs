/// TrueType/OpenType glyph rendering via rusttype

use std::fs;
#[cfg(feature = "system-fonts")]
use std::sync::OnceLock;

use image::Rgb;
#[cfg(feature = "system-fonts")]
use log::debug;
use rusttype::{point, Font, PositionedGlyph, Scale};

use super::{FontLoadError, FontPreference, GlyphFont};
use crate::rendering::{Canvas, GlyphBox};

pub struct ScalableFont {
    font: Font<'static>,
    scale: Scale,
    ascent: f32,
    name: String,
}

impl ScalableFont {
    /// Locate the preferred font and prepare it at `px` pixels per em.
    pub fn load(preference: &FontPreference, px: u32) -> Result<Self, FontLoadError> {
        if px == 0 {
            return Err(FontLoadError::ZeroSize);
        }
        let (data, index, name) = match preference {
            FontPreference::Families(families) => load_system_face(families)?,
            FontPreference::Path(path) => {
                let data = fs::read(path).map_err(|source| FontLoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                (data, 0, path.display().to_string())
            }
        };
        Self::from_data(data, index, px, name)
    }

    pub fn from_data(
        data: Vec<u8>,
        index: u32,
        px: u32,
        name: String,
    ) -> Result<Self, FontLoadError> {
        let font = Font::try_from_vec_and_index(data, index).ok_or(FontLoadError::Parse)?;

        // rusttype scales so that ascent - descent equals the scale; convert
        // so that one em is `px` pixels instead.
        let units_per_em = f32::from(font.units_per_em());
        let unscaled = font.v_metrics_unscaled();
        let line = unscaled.ascent - unscaled.descent;
        let height = if units_per_em > 0.0 && line > 0.0 {
            px as f32 * line / units_per_em
        } else {
            px as f32
        };
        let scale = Scale::uniform(height);
        let ascent = font.v_metrics(scale).ascent;

        Ok(Self {
            font,
            scale,
            ascent,
            name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn layout(&self, text: &str, origin: (i32, i32)) -> Vec<PositionedGlyph<'static>> {
        let start = point(origin.0 as f32, origin.1 as f32 + self.ascent);
        self.font.layout(text, self.scale, start).collect()
    }
}

impl GlyphFont for ScalableFont {
    fn text_bbox(&self, text: &str) -> GlyphBox {
        self.layout(text, (0, 0))
            .iter()
            .filter_map(|g| g.pixel_bounding_box())
            .map(|r| GlyphBox {
                left: r.min.x,
                top: r.min.y,
                right: r.max.x,
                bottom: r.max.y,
            })
            .fold(GlyphBox::default(), |acc, b| acc.union(&b))
    }

    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        for glyph in self.layout(text, origin) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, coverage| {
                    canvas.blend(bb.min.x + x as i32, bb.min.y + y as i32, coverage, color);
                });
            }
        }
    }
}

/// Installed fonts, scanned once per process.
#[cfg(feature = "system-fonts")]
pub fn system_database() -> &'static fontdb::Database {
    static DATABASE: OnceLock<fontdb::Database> = OnceLock::new();
    DATABASE.get_or_init(|| {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!("scanned {} system font faces", db.len());
        db
    })
}

#[cfg(feature = "system-fonts")]
fn load_system_face(families: &[String]) -> Result<(Vec<u8>, u32, String), FontLoadError> {
    let db = system_database();

    for name in families {
        let family = [fontdb::Family::Name(name.as_str())];
        let query = fontdb::Query {
            families: &family,
            ..fontdb::Query::default()
        };
        let Some(id) = db.query(&query) else {
            continue;
        };
        if let Some((data, index)) = db.with_face_data(id, |data, index| (data.to_vec(), index)) {
            return Ok((data, index, name.clone()));
        }
    }
    Err(FontLoadError::NotFound(families.join(", ")))
}

#[cfg(not(feature = "system-fonts"))]
fn load_system_face(_families: &[String]) -> Result<(Vec<u8>, u32, String), FontLoadError> {
    Err(FontLoadError::DiscoveryUnavailable)
}
