//! Full carousel card: header, clipped strip, direction indicator
//!
//! [`CarouselView`] is the only component that talks to the engine. It
//! samples the rendered offset, walks the visible slots, resolves each image
//! through an [`ImageSource`] and records failures back into the
//! [`Carousel`] so every copy of a failed item shows the placeholder and the
//! image is never requested again.

use carousel::{Carousel, Direction, Lifecycle};
use embassy_time::{Duration, Instant};
use embedded_graphics::{
    draw_target::DrawTargetExt,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
};
use platform::ImageSource;

use crate::header::Header;
use crate::indicator::DirectionIndicator;
use crate::motion::{Entrance, EntranceState};
use crate::palette::Palette;
use crate::tile::{accent_offset, ImageTile};

/// Left inset of the strip inside the card
pub const STRIP_INSET: i32 = 32;
/// Distance of the direction indicator from the card edge
const INDICATOR_MARGIN: i32 = 28;
/// Corner radius of the card
const CARD_RADIUS: u32 = 24;

/// What a frame contained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Tiles drawn with a loaded image
    pub images: usize,
    /// Tiles drawn with the placeholder
    pub placeholders: usize,
    /// The card was not drawn: entrance delay, or the carousel is unmounted
    pub hidden: bool,
}

impl FrameReport {
    /// Every tile drawn this frame
    pub fn tiles(&self) -> usize {
        self.images.saturating_add(self.placeholders)
    }
}

/// Renders one carousel inside `bounds`.
pub struct CarouselView {
    bounds: Rectangle,
    header_height: u32,
    entrance: Option<Entrance>,
}

impl CarouselView {
    /// View filling `bounds`, with the default header and entrance
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            header_height: platform::config::HEADER_HEIGHT,
            entrance: Some(Entrance::DEFAULT),
        }
    }

    /// Set height of the title band
    pub fn header_height(mut self, height: u32) -> Self {
        self.header_height = height;
        self
    }

    /// Set or disable the entrance animation
    pub fn entrance(mut self, entrance: Option<Entrance>) -> Self {
        self.entrance = entrance;
        self
    }

    /// Area of the whole card
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Area tiles are clipped to, at rest
    pub fn viewport(&self) -> Rectangle {
        let header = i32::try_from(self.header_height).unwrap_or(i32::MAX);
        Rectangle::new(
            self.bounds.top_left + Point::new(0, header),
            Size::new(
                self.bounds.size.width,
                self.bounds.size.height.saturating_sub(self.header_height),
            ),
        )
    }

    /// Top-left corner of a tile at viewport x `x`, at rest
    pub fn tile_origin(&self, x: i32, item_height: u32) -> Point {
        let viewport = self.viewport();
        let spare = viewport.size.height.saturating_sub(item_height) / 2;
        viewport.top_left + Point::new(x, i32::try_from(spare).unwrap_or(0))
    }

    /// Render the carousel as it looks at `now`.
    ///
    /// An unmounted carousel is off screen: nothing is drawn or loaded and
    /// its state is left untouched.
    pub fn render<D, S>(
        &self,
        carousel: &mut Carousel<'_>,
        images: &mut S,
        display: &mut D,
        now: Instant,
    ) -> Result<FrameReport, D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
        S: ImageSource,
    {
        let mut report = FrameReport::default();
        if carousel.lifecycle() == Lifecycle::Unmounted {
            report.hidden = true;
            return Ok(report);
        }
        let elapsed = carousel
            .mounted_at()
            .and_then(|at| now.checked_duration_since(at))
            .unwrap_or(Duration::from_ticks(0));
        let config = *carousel.config();
        let palette = Palette::for_theme(config.theme);

        let dx = match self.entrance.map(|e| e.at(elapsed, config.direction.sign())) {
            Some(EntranceState::Hidden) => {
                report.hidden = true;
                return Ok(report);
            }
            Some(EntranceState::Sliding { dx }) => dx,
            Some(EntranceState::Settled) | None => 0,
        };
        let shift = Point::new(dx, 0);
        let mut display = display.clipped(&self.bounds);

        // Card
        let card = self.bounds.translate(shift);
        RoundedRectangle::with_equal_corners(card, Size::new(CARD_RADIUS, CARD_RADIUS))
            .into_styled(PrimitiveStyle::with_fill(palette.background))
            .draw(&mut display)?;

        // Strip
        let viewport = self.viewport().translate(shift);
        let tile_size = Size::new(config.item_width, config.item_height);
        for (slot, x) in carousel.visible_slots(STRIP_INSET, viewport.size.width, now) {
            let origin = self.tile_origin(x, config.item_height) + shift;
            let tile = ImageTile::new(tile_size, slot.item.label, palette)
                .accent_offset(accent_offset(elapsed, slot.position));
            let mut strip = display.clipped(&viewport);

            let loaded = if carousel.shows_placeholder(slot.item_index) {
                None
            } else {
                match images.load(slot.item.src, tile_size) {
                    Ok(image) => Some(image),
                    Err(_) => {
                        carousel.record_image_failure(slot.item_index);
                        None
                    }
                }
            };
            match loaded {
                Some(image) => {
                    tile.render(&mut strip, origin, Some(&image))?;
                    report.images = report.images.saturating_add(1);
                }
                None => {
                    tile.render::<_, S::Image>(&mut strip, origin, None)?;
                    report.placeholders = report.placeholders.saturating_add(1);
                }
            }
        }

        // Header over the strip
        Header::new(
            config.title,
            config.subtitle,
            Size::new(card.size.width, self.header_height),
            palette,
        )
        .render(&mut display, card.top_left)?;

        // Indicator
        let mid_y = viewport.center().y;
        let anchor_x = match config.direction {
            Direction::Left => card.top_left.x.saturating_add(INDICATOR_MARGIN),
            Direction::Right => card
                .top_left
                .x
                .saturating_add(i32::try_from(card.size.width).unwrap_or(i32::MAX))
                .saturating_sub(INDICATOR_MARGIN),
        };
        DirectionIndicator::new(config.direction, palette.indicator)
            .at(elapsed)
            .render(&mut display, Point::new(anchor_x, mid_y))?;

        Ok(report)
    }
}
