//! Fallback graphic shown when an image fails to load

use embedded_graphics::{
    mono_font::{ascii::FONT_7X14, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::palette::Palette;

/// Caption drawn on the placeholder
pub const PLACEHOLDER_TEXT: &str = "Image Loading...";

/// Solid tile in the theme colour with a centred caption.
pub struct Placeholder {
    size: Size,
    fill: Rgb888,
    text_color: Rgb888,
}

impl Placeholder {
    /// Placeholder of `size` coloured from `palette`
    pub fn new(size: Size, palette: &Palette) -> Self {
        Self {
            size,
            fill: palette.placeholder,
            text_color: palette.placeholder_text,
        }
    }

    /// Fill colour
    pub fn fill(&self) -> Rgb888 {
        self.fill
    }

    /// Size of the filled area
    pub fn size(&self) -> Size {
        self.size
    }

    /// Render placeholder with its top-left corner at `position`
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let area = Rectangle::new(position, self.size);
        area.into_styled(PrimitiveStyle::with_fill(self.fill))
            .draw(display)?;

        let style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            PLACEHOLDER_TEXT,
            area.center(),
            MonoTextStyle::new(&FONT_7X14, self.text_color),
            style,
        )
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel::Theme;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_placeholder_uses_theme_fill() {
        let p = Placeholder::new(Size::new(20, 30), &Palette::for_theme(Theme::Green));
        assert_eq!(p.fill(), Rgb888::new(0x10, 0xB9, 0x81));
        assert_eq!(p.size(), Size::new(20, 30));
    }

    #[test]
    fn test_placeholder_fills_corners() {
        let palette = Palette::for_theme(Theme::Pink);
        let p = Placeholder::new(Size::new(40, 30), &palette);
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        p.render(&mut display, Point::zero()).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(palette.placeholder));
        assert_eq!(display.get_pixel(Point::new(39, 29)), Some(palette.placeholder));
    }
}
