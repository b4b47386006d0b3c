//! Image loading abstraction
//!
//! The carousel never decodes anything itself. It asks an [`ImageSource`] to
//! resolve a locator (a path-like string such as `/images/memories/m1.jpg`)
//! into something drawable, and falls back to a generated placeholder when
//! the source reports an [`ImageError`].

use embedded_graphics::{
    image::ImageDrawable,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};

/// Resolves image locators to drawable rasters.
///
/// Implementations are expected to size the returned image to `size` (the
/// carousel tile size) so the caller can draw it at the tile origin without
/// further scaling. Caching is left to the implementation.
pub trait ImageSource {
    /// Drawable produced for a successfully loaded locator.
    type Image: ImageDrawable<Color = Rgb888>;

    /// Load `src`, scaled to `size`.
    fn load(&mut self, src: &str, size: Size) -> Result<Self::Image, ImageError>;
}

impl<S: ImageSource> ImageSource for &mut S {
    type Image = S::Image;

    fn load(&mut self, src: &str, size: Size) -> Result<Self::Image, ImageError> {
        (**self).load(src, size)
    }
}

/// Reasons an image could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// Nothing exists at the locator
    NotFound,
    /// Data exists but could not be decoded
    Decode,
    /// Format or pixel layout is not supported
    Unsupported,
}

#[cfg(feature = "std")]
impl std::error::Error for ImageError {}

impl core::fmt::Display for ImageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Image not found"),
            Self::Decode => write!(f, "Image could not be decoded"),
            Self::Unsupported => write!(f, "Image format not supported"),
        }
    }
}

/// A single-colour raster.
///
/// Used by the mock image source and handy as a stand-in for artwork that has
/// not been provisioned yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolidImage {
    size: Size,
    color: Rgb888,
}

impl SolidImage {
    /// Create a solid image of `size` filled with `color`.
    #[must_use]
    pub const fn new(size: Size, color: Rgb888) -> Self {
        Self { size, color }
    }

    /// Fill colour.
    #[must_use]
    pub const fn color(&self) -> Rgb888 {
        self.color
    }
}

impl OriginDimensions for SolidImage {
    fn size(&self) -> Size {
        self.size
    }
}

impl ImageDrawable for SolidImage {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_solid(&Rectangle::new(Point::zero(), self.size), self.color)
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let visible = area.intersection(&Rectangle::new(Point::zero(), self.size));
        target.fill_solid(&Rectangle::new(Point::zero(), visible.size), self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_image_reports_its_size() {
        let img = SolidImage::new(Size::new(200, 300), Rgb888::RED);
        assert_eq!(img.size(), Size::new(200, 300));
        assert_eq!(img.color(), Rgb888::RED);
    }

    #[test]
    fn image_error_display() {
        assert_eq!(format!("{}", ImageError::NotFound), "Image not found");
        assert_eq!(format!("{}", ImageError::Decode), "Image could not be decoded");
        assert_eq!(
            format!("{}", ImageError::Unsupported),
            "Image format not supported"
        );
    }
}
