//! CPU framebuffer for headless rendering

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

/// Row-major `Rgb888` framebuffer
pub struct Framebuffer {
    pub pixels: Vec<Rgb888>,
    pub width: u32,
    pub height: u32,
}

impl Framebuffer {
    /// Create a framebuffer filled with black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgb888::BLACK)
    }

    /// Create a framebuffer filled with `color`
    // Panel-sized buffers: width * height fits in u32.
    #[allow(clippy::arithmetic_side_effects)]
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        let size = (width * height) as usize;
        Self {
            pixels: vec![color; size],
            width,
            height,
        }
    }

    /// Set pixel at coordinates; out of bounds writes are dropped
    // x < width and y < height are checked first, so the index is in bounds.
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb888) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) as usize;
            self.pixels[idx] = color;
        }
    }

    /// Get pixel at coordinates
    #[allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Fill entire framebuffer with color
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(color);
    }

    /// Copy into an `image` buffer for encoding
    pub fn to_image(&self) -> image::RgbImage {
        let raw: Vec<u8> = self
            .pixels
            .iter()
            .flat_map(|c| [c.r(), c.g(), c.b()])
            .collect();
        // Length is exactly width * height * 3, so construction cannot fail.
        image::RgbImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new(4, 3);
        assert_eq!(fb.pixels.len(), 12);
        assert_eq!(fb.get_pixel(3, 2), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel(1, 2, Rgb888::RED);
        assert_eq!(fb.get_pixel(1, 2), Some(Rgb888::RED));
        assert_eq!(fb.get_pixel(2, 1), Some(Rgb888::BLACK));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = Framebuffer::new(4, 3);
        fb.set_pixel(4, 0, Rgb888::RED);
        assert_eq!(fb.get_pixel(4, 0), None);
        assert!(fb.pixels.iter().all(|p| *p == Rgb888::BLACK));
    }

    #[test]
    fn test_image_export() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(0, 0, Rgb888::new(0xEC, 0x48, 0x99));
        let img = fb.to_image();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0).0, [0xEC, 0x48, 0x99]);
    }
}
