//! Carousel items

/// One image in a carousel: where to load it from and the caption under it.
///
/// Items are supplied by the caller and never mutated; the carousel only
/// windows them for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarouselItem<'a> {
    /// Image locator, resolved by a `platform::ImageSource`
    pub src: &'a str,
    /// Caption drawn in the label pill
    pub label: &'a str,
}

impl<'a> CarouselItem<'a> {
    /// Create an item
    pub const fn new(src: &'a str, label: &'a str) -> Self {
        Self { src, label }
    }
}
