//! Headless display for the Enchanted Garden carousel
//!
//! An [`Emulator`] is an in-memory `Rgb888` panel implementing
//! `embedded-graphics`' [`DrawTarget`]. The desktop runner draws frames into
//! it and saves them as PNG; `garden-testing` wraps it with assertions.
//!
//! ```no_run
//! use garden_emulator::Emulator;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut display = Emulator::new(800, 420);
//! Rectangle::new(Point::zero(), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
//!     .draw(&mut display)
//!     .unwrap();
//! display.present();
//! display.screenshot("frame.png").unwrap();
//! ```

// Desktop crate: pixel coordinates are bounds-checked before indexing.
#![allow(clippy::arithmetic_side_effects)]
#![warn(clippy::all)]
#![allow(missing_docs)]

pub mod framebuffer;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

pub use framebuffer::Framebuffer;

/// Counters updated as frames are drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayStats {
    /// Frames marked complete with [`Emulator::present`]
    pub frames_presented: u64,
    /// Pixel writes that landed inside the panel
    pub pixels_drawn: u64,
    /// Pixel writes outside the panel, dropped
    pub pixels_clipped: u64,
}

/// Headless `Rgb888` panel
pub struct Emulator {
    pub framebuffer: Framebuffer,
    background: Rgb888,
    stats: DisplayStats,
}

impl Emulator {
    /// Create a black panel
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Rgb888::BLACK)
    }

    /// Create a panel that clears to `background`
    pub fn with_background(width: u32, height: u32, background: Rgb888) -> Self {
        Self {
            framebuffer: Framebuffer::filled(width, height, background),
            background,
            stats: DisplayStats::default(),
        }
    }

    /// Colour used by [`Emulator::clear_frame`]
    pub fn background(&self) -> Rgb888 {
        self.background
    }

    /// Reset the panel to its background colour
    pub fn clear_frame(&mut self) {
        self.framebuffer.fill(self.background);
    }

    /// Mark the current frame as complete
    pub fn present(&mut self) {
        self.stats.frames_presented = self.stats.frames_presented.saturating_add(1);
    }

    pub fn stats(&self) -> &DisplayStats {
        &self.stats
    }

    /// Save the framebuffer as a PNG
    pub fn screenshot(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.framebuffer.to_image().save(path)?;
        Ok(())
    }
}

impl DrawTarget for Emulator {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            match (u32::try_from(point.x), u32::try_from(point.y)) {
                (Ok(x), Ok(y)) if x < self.framebuffer.width && y < self.framebuffer.height => {
                    self.framebuffer.set_pixel(x, y, color);
                    self.stats.pixels_drawn = self.stats.pixels_drawn.saturating_add(1);
                }
                _ => {
                    self.stats.pixels_clipped = self.stats.pixels_clipped.saturating_add(1);
                }
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Emulator {
    fn size(&self) -> Size {
        Size::new(self.framebuffer.width, self.framebuffer.height)
    }
}
