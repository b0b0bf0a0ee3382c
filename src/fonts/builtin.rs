/// Built-in fixed-size 5x7 bitmap font
///
/// Always available, so it backs any failure to load a scalable font. It
/// covers `A-Z` and `0-9`; lowercase letters use the uppercase shapes, space
/// advances without ink, and anything else is drawn as a hollow box.

use image::Rgb;

use super::GlyphFont;
use crate::rendering::{Canvas, GlyphBox};

const GLYPH_WIDTH: i32 = 5;
const GLYPH_HEIGHT: i32 = 7;
const ADVANCE: i32 = GLYPH_WIDTH + 1;

type Bitmap = [u8; GLYPH_HEIGHT as usize];

const LETTERS: [Bitmap; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

const DIGITS: [Bitmap; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const BLANK: Bitmap = [0; GLYPH_HEIGHT as usize];
const MISSING: Bitmap = [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111];

fn bitmap(c: char) -> &'static Bitmap {
    match c.to_ascii_uppercase() {
        c @ 'A'..='Z' => &LETTERS[(c as u8 - b'A') as usize],
        c @ '0'..='9' => &DIGITS[(c as u8 - b'0') as usize],
        ' ' => &BLANK,
        _ => &MISSING,
    }
}

/// Lit pixels of `text`, relative to the line origin.
fn ink(text: &str) -> impl Iterator<Item = (i32, i32)> + '_ {
    text.chars().enumerate().flat_map(|(i, c)| {
        let pen = i as i32 * ADVANCE;
        let rows = bitmap(c);
        (0..GLYPH_HEIGHT).flat_map(move |y| {
            (0..GLYPH_WIDTH)
                .filter(move |x| rows[y as usize] >> (GLYPH_WIDTH - 1 - x) & 1 == 1)
                .map(move |x| (pen + x, y))
        })
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    pub fn new() -> Self {
        BuiltinFont
    }
}

impl GlyphFont for BuiltinFont {
    fn text_bbox(&self, text: &str) -> GlyphBox {
        ink(text).fold(GlyphBox::default(), |acc, (x, y)| {
            acc.union(&GlyphBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            })
        })
    }

    fn draw_text(&self, canvas: &mut Canvas, origin: (i32, i32), text: &str, color: Rgb<u8>) {
        for (x, y) in ink(text) {
            canvas.put(origin.0 + x, origin.1 + y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([0, 0, 0]);
    const FG: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn b_fills_its_cell() {
        let bbox = BuiltinFont.text_bbox("B");
        assert_eq!(bbox, GlyphBox { left: 0, top: 0, right: 5, bottom: 7 });
    }

    #[test]
    fn narrow_glyph_has_tight_box() {
        // "1" has no ink in its outer columns
        let bbox = BuiltinFont.text_bbox("1");
        assert_eq!(bbox, GlyphBox { left: 1, top: 0, right: 4, bottom: 7 });
    }

    #[test]
    fn empty_and_blank_text_measure_zero() {
        assert_eq!(BuiltinFont.text_bbox(""), GlyphBox::default());
        assert_eq!(BuiltinFont.text_bbox("  "), GlyphBox::default());
    }

    #[test]
    fn multiple_chars_advance() {
        let bbox = BuiltinFont.text_bbox("BB");
        assert_eq!(bbox.width(), ADVANCE + GLYPH_WIDTH);
    }

    #[test]
    fn draw_places_ink_at_origin() {
        let mut canvas = Canvas::new(16, BG).unwrap();
        BuiltinFont.draw_text(&mut canvas, (3, 4), "B", FG);
        // top-left stroke of B
        assert_eq!(canvas.pixel(3, 4), Some(FG));
        // top-right corner of B's cell is empty
        assert_eq!(canvas.pixel(7, 4), Some(BG));
        let lit = canvas.as_image().pixels().filter(|p| **p == FG).count();
        assert_eq!(lit, ink("B").count());
    }

    #[test]
    fn unknown_chars_draw_a_box() {
        let bbox = BuiltinFont.text_bbox("é");
        assert_eq!(bbox, GlyphBox { left: 0, top: 0, right: 5, bottom: 7 });
    }

    #[test]
    fn lowercase_matches_uppercase() {
        assert_eq!(ink("b").collect::<Vec<_>>(), ink("B").collect::<Vec<_>>());
    }
}
