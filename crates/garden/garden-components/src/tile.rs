//! One carousel tile: image or placeholder, caption pill and floating accent

use embedded_graphics::{
    draw_target::DrawTargetExt,
    image::{Image, ImageDrawable},
    mono_font::{ascii::FONT_6X13_BOLD, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use embassy_time::Duration;

use crate::motion::oscillate;
use crate::palette::Palette;
use crate::placeholder::Placeholder;

/// Inset of the caption pill and accent from the tile edges
const INSET: u32 = 16;
/// Height of the caption pill
const PILL_HEIGHT: u32 = 32;
/// Diameter of the floating accent
const ACCENT_DIAMETER: u32 = 12;
/// Vertical travel of the accent either side of rest
pub const ACCENT_BOB: i32 = 5;
/// Period of one accent bob
pub const ACCENT_PERIOD: Duration = Duration::from_millis(3000);
/// Extra phase delay per strip position
pub const ACCENT_STAGGER: Duration = Duration::from_millis(200);

/// Vertical accent offset for the slot at `position`, `elapsed` after mount.
///
/// Each slot starts bobbing `position * 200 ms` later than the previous one
/// and rests at the top of its travel until then.
pub fn accent_offset(elapsed: Duration, position: usize) -> i32 {
    let stagger = u64::try_from(position)
        .unwrap_or(u64::MAX)
        .saturating_mul(ACCENT_STAGGER.as_ticks());
    let since = elapsed
        .checked_sub(Duration::from_ticks(stagger))
        .unwrap_or(Duration::from_ticks(0));
    oscillate(since, ACCENT_PERIOD, ACCENT_BOB)
}

/// A single tile of the strip.
pub struct ImageTile<'a> {
    size: Size,
    label: &'a str,
    palette: Palette,
    accent_dy: i32,
}

impl<'a> ImageTile<'a> {
    /// Tile of `size` captioned `label`
    pub fn new(size: Size, label: &'a str, palette: Palette) -> Self {
        Self {
            size,
            label,
            palette,
            accent_dy: 0,
        }
    }

    /// Set vertical offset of the floating accent
    pub fn accent_offset(mut self, dy: i32) -> Self {
        self.accent_dy = dy;
        self
    }

    /// Tile size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Bounds of the caption pill relative to the tile origin
    pub fn pill_bounds(&self) -> Rectangle {
        let width = self.size.width.saturating_sub(INSET.saturating_mul(2));
        let top = self
            .size
            .height
            .saturating_sub(INSET)
            .saturating_sub(PILL_HEIGHT);
        Rectangle::new(
            Point::new(to_i32(INSET), to_i32(top)),
            Size::new(width, PILL_HEIGHT),
        )
    }

    /// Centre of the floating accent relative to the tile origin
    pub fn accent_center(&self) -> Point {
        let radius = ACCENT_DIAMETER / 2;
        let x = self
            .size
            .width
            .saturating_sub(INSET)
            .saturating_sub(radius);
        let y = INSET.saturating_add(radius);
        Point::new(to_i32(x), to_i32(y).saturating_add(self.accent_dy))
    }

    /// Render the tile at `position`.
    ///
    /// `image` of `None` draws the themed [`Placeholder`]. The image is
    /// clipped to the tile.
    pub fn render<D, I>(
        &self,
        display: &mut D,
        position: Point,
        image: Option<&I>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
        I: ImageDrawable<Color = Rgb888>,
    {
        let area = Rectangle::new(position, self.size);
        match image {
            Some(image) => {
                Image::new(image, position).draw(&mut display.clipped(&area))?;
            }
            None => Placeholder::new(self.size, &self.palette).render(display, position)?,
        }

        // Caption pill
        let pill = self.pill_bounds().translate(position);
        let radius = PILL_HEIGHT / 2;
        RoundedRectangle::with_equal_corners(pill, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(self.palette.label))
            .draw(display)?;
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            self.label,
            pill.center(),
            MonoTextStyle::new(&FONT_6X13_BOLD, self.palette.label_text),
            text_style,
        )
        .draw(&mut display.clipped(&pill))?;

        // Floating accent
        Circle::with_center(self.accent_center() + position, ACCENT_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(self.palette.floating))
            .draw(&mut display.clipped(&area))?;

        Ok(())
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
