//! Title band drawn above the strip

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    pixelcolor::Rgb888,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::palette::Palette;

/// Title and subtitle band.
///
/// Mono fonts carry ASCII only, so the decorative glyphs framing the title
/// are not drawn.
pub struct Header<'a> {
    title: &'a str,
    subtitle: &'a str,
    size: Size,
    palette: Palette,
}

impl<'a> Header<'a> {
    /// Header of `size` with the given text
    pub fn new(title: &'a str, subtitle: &'a str, size: Size, palette: Palette) -> Self {
        Self {
            title,
            subtitle,
            size,
            palette,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Render header with its top-left corner at `position`
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let area = Rectangle::new(position, self.size);
        area.into_styled(PrimitiveStyle::with_fill(self.palette.header))
            .draw(display)?;

        let centered = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let center_x = area.center().x;

        Text::with_text_style(
            self.title,
            Point::new(center_x, position.y.saturating_add(12)),
            MonoTextStyle::new(&FONT_10X20, self.palette.title),
            centered,
        )
        .draw(display)?;

        Text::with_text_style(
            self.subtitle,
            Point::new(center_x, position.y.saturating_add(38)),
            MonoTextStyle::new(&FONT_6X10, self.palette.subtitle),
            centered,
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
    fn test_header_fills_band() {
        let palette = Palette::for_theme(Theme::Green);
        let header = Header::new("M", "s", Size::new(64, 60), palette);
        let mut display: MockDisplay<Rgb888> = MockDisplay::new();
        display.set_allow_overdraw(true);
        header.render(&mut display, Point::zero()).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(palette.header));
        assert_eq!(display.get_pixel(Point::new(63, 59)), Some(palette.header));
    }
}
