//! Carousel configuration.
//!
//! Everything here is fixed for the lifetime of a carousel instance. The
//! behavioural fields (items, direction, timing, geometry) drive the engine;
//! theme and the text fields are display metadata only.

use embassy_time::Duration;

use crate::direction::{Direction, Theme};
use crate::fallback::MAX_ITEMS;
use crate::item::CarouselItem;
use crate::transition::Easing;

/// Default autoplay cadence
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(3500);
/// Default duration of the animated move
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(800);
/// Default tile width in pixels
pub const DEFAULT_ITEM_WIDTH: u32 = 200;
/// Default tile height in pixels
pub const DEFAULT_ITEM_HEIGHT: u32 = 300;
/// Default gap between tiles in pixels
pub const DEFAULT_GAP: u32 = 15;
/// Longest cycle in pixels, `i32::MAX`; offsets are `i32`
pub const MAX_CYCLE: u64 = 0x7FFF_FFFF;

/// Immutable configuration of one carousel.
///
/// Fields are public for reading; build with [`CarouselConfig::new`] and the
/// setter chain. [`crate::Carousel::new`] validates the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig<'a> {
    /// Items in display order
    pub items: &'a [CarouselItem<'a>],
    /// Scroll direction
    pub direction: Direction,
    /// Autoplay cadence
    pub tick_interval: Duration,
    /// Duration of the animated move, strictly shorter than `tick_interval`
    pub transition: Duration,
    /// Easing curve of the animated move
    pub easing: Easing,
    /// Tile width in pixels
    pub item_width: u32,
    /// Tile height in pixels
    pub item_height: u32,
    /// Gap between tiles in pixels
    pub gap: u32,
    /// Colour theme
    pub theme: Theme,
    /// Header title
    pub title: &'a str,
    /// Header subtitle
    pub subtitle: &'a str,
    /// Glyph framing the title.
    ///
    /// Carried for renderers with emoji-capable fonts; the mono-font
    /// components in `garden-components` draw the title alone.
    pub emoji: &'a str,
    /// Glyph of the floating accent on each tile.
    ///
    /// Carried like [`Self::emoji`]; `garden-components` draws the accent
    /// as a themed dot.
    pub floating_emoji: &'a str,
}

impl<'a> CarouselConfig<'a> {
    /// Configuration for `items` with default timing and geometry.
    pub const fn new(items: &'a [CarouselItem<'a>]) -> Self {
        Self {
            items,
            direction: Direction::Left,
            tick_interval: DEFAULT_TICK_INTERVAL,
            transition: DEFAULT_TRANSITION,
            easing: Easing::EaseInOut,
            item_width: DEFAULT_ITEM_WIDTH,
            item_height: DEFAULT_ITEM_HEIGHT,
            gap: DEFAULT_GAP,
            theme: Theme::Pink,
            title: "",
            subtitle: "",
            emoji: "",
            floating_emoji: "",
        }
    }

    /// Set scroll direction
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set autoplay cadence
    #[must_use]
    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set duration of the animated move
    #[must_use]
    pub fn transition(mut self, duration: Duration) -> Self {
        self.transition = duration;
        self
    }

    /// Set easing curve
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set tile size
    #[must_use]
    pub fn item_size(mut self, width: u32, height: u32) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    /// Set gap between tiles
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set colour theme
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set header title and subtitle
    #[must_use]
    pub fn titled(mut self, title: &'a str, subtitle: &'a str) -> Self {
        self.title = title;
        self.subtitle = subtitle;
        self
    }

    /// Set decorative glyphs for the header and the floating accent
    #[must_use]
    pub fn emoji(mut self, emoji: &'a str, floating: &'a str) -> Self {
        self.emoji = emoji;
        self.floating_emoji = floating;
        self
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::TransitionTooLong`] when the animated move would still
    ///   be running when the next tick fires.
    /// - [`ConfigError::ZeroStride`] when width plus gap is zero.
    /// - [`ConfigError::TooManyItems`] above [`MAX_ITEMS`].
    /// - [`ConfigError::CycleTooLong`] when one full cycle, `items * stride`
    ///   pixels, does not fit an `i32` offset.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition >= self.tick_interval {
            return Err(ConfigError::TransitionTooLong {
                transition_ms: self.transition.as_millis(),
                interval_ms: self.tick_interval.as_millis(),
            });
        }
        if self.stride() == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if self.items.len() > MAX_ITEMS {
            return Err(ConfigError::TooManyItems {
                count: self.items.len(),
                max: MAX_ITEMS,
            });
        }
        let cycle = self.cycle();
        let max = MAX_CYCLE;
        if cycle > max {
            return Err(ConfigError::CycleTooLong { cycle, max });
        }
        Ok(())
    }

    /// Pixels the strip moves over one full cycle: `items * stride`.
    pub fn cycle(&self) -> u64 {
        let len = u64::try_from(self.items.len()).unwrap_or(u64::MAX);
        len.saturating_mul(u64::from(self.stride()))
    }

    /// Pixels the strip moves per tick: item width plus gap.
    pub const fn stride(&self) -> u32 {
        self.item_width.saturating_add(self.gap)
    }
}

/// Invalid carousel configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The transition must be strictly shorter than the tick interval.
    TransitionTooLong {
        /// Configured transition
        transition_ms: u64,
        /// Configured tick interval
        interval_ms: u64,
    },
    /// Item width plus gap is zero, so the strip would never move.
    ZeroStride,
    /// More items than the fallback record can track.
    TooManyItems {
        /// Items supplied
        count: usize,
        /// Capacity
        max: usize,
    },
    /// One cycle of the strip is longer than an offset can represent.
    CycleTooLong {
        /// `items * stride` in pixels
        cycle: u64,
        /// Longest representable cycle
        max: u64,
    },
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TransitionTooLong {
                transition_ms,
                interval_ms,
            } => write!(
                f,
                "transition of {transition_ms} ms must be shorter than the {interval_ms} ms tick interval"
            ),
            Self::ZeroStride => write!(f, "item width plus gap must be non-zero"),
            Self::TooManyItems { count, max } => {
                write!(f, "{count} items exceeds the carousel capacity of {max}")
            }
            Self::CycleTooLong { cycle, max } => {
                write!(f, "strip cycle of {cycle} px exceeds the {max} px offset range")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [CarouselItem<'static>; 2] =
        [CarouselItem::new("a.jpg", "A"), CarouselItem::new("b.jpg", "B")];

    #[test]
    fn test_defaults() {
        let config = CarouselConfig::new(&ITEMS);
        assert_eq!(config.stride(), 215);
        assert_eq!(config.tick_interval, Duration::from_millis(3500));
        assert_eq!(config.transition, Duration::from_millis(800));
        assert_eq!(config.direction, Direction::Left);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = CarouselConfig::new(&ITEMS)
            .direction(Direction::Right)
            .theme(Theme::Green)
            .item_size(100, 150)
            .gap(10)
            .titled("Memories", "Beautiful moments to cherish");
        assert_eq!(config.direction, Direction::Right);
        assert_eq!(config.theme, Theme::Green);
        assert_eq!(config.stride(), 110);
        assert_eq!(config.item_height, 150);
        assert_eq!(config.title, "Memories");
    }

    #[test]
    fn test_transition_must_be_shorter_than_interval() {
        let config = CarouselConfig::new(&ITEMS)
            .tick_interval(Duration::from_millis(500))
            .transition(Duration::from_millis(500));
        assert_eq!(
            config.validate(),
            Err(ConfigError::TransitionTooLong {
                transition_ms: 500,
                interval_ms: 500
            })
        );
    }

    #[test]
    fn test_zero_stride_rejected() {
        let config = CarouselConfig::new(&ITEMS).item_size(0, 300).gap(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroStride));
    }

    #[test]
    fn test_too_many_items_rejected() {
        let items = [CarouselItem::new("x.jpg", "X"); MAX_ITEMS + 1];
        let config = CarouselConfig::new(&items);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyItems {
                count: MAX_ITEMS + 1,
                max: MAX_ITEMS
            })
        );
    }

    #[test]
    fn test_cycle_beyond_offset_range_rejected() {
        let config = CarouselConfig::new(&ITEMS).item_size(1_500_000_000, 300).gap(0);
        assert_eq!(config.cycle(), 3_000_000_000);
        assert_eq!(
            config.validate(),
            Err(ConfigError::CycleTooLong {
                cycle: 3_000_000_000,
                max: MAX_CYCLE
            })
        );
    }

    #[test]
    fn test_cycle_at_offset_limit_accepted() {
        let items = [CarouselItem::new("x.jpg", "X")];
        let config = CarouselConfig::new(&items).item_size(u32::MAX / 2, 300).gap(0);
        assert_eq!(config.cycle(), MAX_CYCLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_items_are_valid() {
        assert!(CarouselConfig::new(&[]).validate().is_ok());
    }

    #[test]
    fn test_error_display() {
        let msg = ConfigError::ZeroStride.to_string();
        assert!(msg.contains("non-zero"));
    }
}
