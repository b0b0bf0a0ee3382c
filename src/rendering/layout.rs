//! Glyph bounding boxes and centering arithmetic

/// Ink extent of rendered text relative to its nominal draw origin.
///
/// The origin is the top-left corner of the line box, with the font's
/// ascender on the top edge. `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl GlyphBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Smallest box covering both. An empty box contributes nothing.
    pub fn union(&self, other: &GlyphBox) -> GlyphBox {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        GlyphBox {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A measured glyph and where to draw it on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayout {
    pub bbox: GlyphBox,
    pub origin: (i32, i32),
}

impl GlyphLayout {
    pub fn centered(size: u32, bbox: GlyphBox) -> Self {
        Self {
            bbox,
            origin: center_origin(size, &bbox),
        }
    }
}

/// Top-left draw position that centers `bbox` in a `size` x `size` canvas.
///
/// Uses floor division and never clamps: a box larger than the canvas gets
/// a negative origin and is clipped when drawn.
pub fn center_origin(size: u32, bbox: &GlyphBox) -> (i32, i32) {
    let size = i64::from(size);
    let x = (size - i64::from(bbox.width())).div_euclid(2);
    let y = (size - i64::from(bbox.height())).div_euclid(2);
    // |size - extent| / 2 stays within i32 for any u32 size and i32 extent
    (x as i32, y as i32)
}
