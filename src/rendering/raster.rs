/// Square RGB canvas that glyphs are drawn into before PNG encoding

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Allocate a `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb<u8>) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        // Drawing works in i32 coordinates, and the buffer must fit in memory.
        let fits = i32::try_from(size).is_ok()
            && (size as usize)
                .checked_mul(size as usize)
                .and_then(|n| n.checked_mul(3))
                .is_some();
        if !fits {
            return Err(Error::CanvasAllocation(size));
        }
        Ok(Self {
            image: RgbImage::from_pixel(size, size, background),
        })
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    /// Mix `color` into the pixel at (x, y) with the given coverage in
    /// `0.0..=1.0`. Coordinates outside the canvas are clipped.
    pub fn blend(&mut self, x: i32, y: i32, coverage: f32, color: Rgb<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) else {
            return;
        };
        let a = coverage.clamp(0.0, 1.0);
        if a >= 1.0 {
            *pixel = color;
            return;
        }
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let mixed = f32::from(*dst) * (1.0 - a) + f32::from(src) * a;
            *dst = mixed.round() as u8;
        }
    }

    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        self.blend(x, y, 1.0, color);
    }

    /// Encode the canvas as an 8-bit RGB PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut png = Vec::new();
        PngEncoder::new(&mut png).write_image(
            self.image.as_raw(),
            self.image.width(),
            self.image.height(),
            ExtendedColorType::Rgb8,
        )?;
        Ok(png)
    }
}
