//! Dense row-major buffer of linear-color pixels, reused across frames.

use anyhow::Context;
use image::RgbImage;

use crate::algebra::Vec3;
use crate::tonemap;

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Vec3>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vec3::ZERO; width * height],
        }
    }

    /// Pack into 0RGB words for the window surface.
    pub fn write_argb(&self, out: &mut [u32]) {
        debug_assert_eq!(out.len(), self.pixels.len());
        for (dst, &c) in out.iter_mut().zip(&self.pixels) {
            let [r, g, b] = tonemap::to_rgb8(c);
            *dst = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
        }
    }

    pub fn save_png(&self, path: &str) -> anyhow::Result<()> {
        let img = RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self.pixels[y as usize * self.width + x as usize];
            image::Rgb(tonemap::to_rgb8(c))
        });
        img.save(path).with_context(|| format!("writing {path}"))?;
        Ok(())
    }
}
