//! Filesystem image source
//!
//! Resolves carousel locators such as `/images/memories/m1.jpg` against an
//! image root, the way a web server maps them onto its `public/` directory.
//! Decoded tiles are cached, and so are failures: a locator that failed once
//! is answered from the cache without touching the disk again.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use embedded_graphics::{
    draw_target::DrawTargetExt,
    image::ImageDrawable,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};
use image::imageops::FilterType;
use platform::{ImageError, ImageSource};

/// Decoded image, already scaled to tile size.
#[derive(Debug, Clone)]
pub struct RasterImage {
    pixels: Arc<image::RgbImage>,
}

impl RasterImage {
    pub fn new(pixels: image::RgbImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }
}

impl OriginDimensions for RasterImage {
    fn size(&self) -> Size {
        let (w, h) = self.pixels.dimensions();
        Size::new(w, h)
    }
}

impl ImageDrawable for RasterImage {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let colors = self
            .pixels
            .pixels()
            .map(|p| Rgb888::new(p.0[0], p.0[1], p.0[2]));
        target.fill_contiguous(&Rectangle::new(Point::zero(), self.size()), colors)
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.draw(&mut target.translated(-area.top_left).clipped(area))
    }
}

/// [`ImageSource`] reading from a directory.
pub struct FsImageSource {
    root: PathBuf,
    cache: HashMap<(String, Size), Result<RasterImage, ImageError>>,
}

impl FsImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path a locator maps to
    pub fn resolve(&self, src: &str) -> PathBuf {
        self.root.join(src.trim_start_matches('/'))
    }

    /// Locators loaded or attempted so far
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn decode(&self, src: &str, size: Size) -> Result<RasterImage, ImageError> {
        let path = self.resolve(src);
        let decoded = image::open(&path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "image load failed");
            classify(&e)
        })?;
        // Fill the tile and crop the overflow, centred.
        let scaled = decoded.resize_to_fill(size.width, size.height, FilterType::Triangle);
        tracing::trace!(path = %path.display(), "image decoded");
        Ok(RasterImage::new(scaled.to_rgb8()))
    }
}

impl ImageSource for FsImageSource {
    type Image = RasterImage;

    fn load(&mut self, src: &str, size: Size) -> Result<Self::Image, ImageError> {
        let key = (src.to_owned(), size);
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        let loaded = self.decode(src, size);
        self.cache.insert(key, loaded.clone());
        loaded
    }
}

fn classify(err: &image::ImageError) -> ImageError {
    match err {
        image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            ImageError::NotFound
        }
        image::ImageError::Unsupported(_) => ImageError::Unsupported,
        _ => ImageError::Decode,
    }
}
