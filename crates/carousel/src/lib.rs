//! Looping image carousel engine
//!
//! A horizontally scrolling strip of images that advances one tile at a
//! fixed cadence and appears to loop forever. The list is drawn three times
//! back to back and the viewport sits on the middle copy, so however far the
//! strip has moved there is always a full row of tiles on either side.
//!
//! # Layers
//!
//! - [`Carousel`] - pure state machine: index, offset, lifecycle, fallbacks
//! - [`Autoplay`] - async driver binding a carousel to a [`platform::TickSource`]
//! - [`Strip`] - windowing iterator over the tripled list
//! - [`Transition`] - eased offset tween sampled per frame
//!
//! Rendering lives in `garden-components`; this crate never draws.
//!
//! # Features
//!
//! - `std`: `std::error::Error` for [`ConfigError`]
//! - `tracing`: log through `tracing`
//! - `defmt`: log through `defmt` and derive `defmt::Format`
//!
//! # Example
//!
//! ```no_run
//! use carousel::prelude::*;
//! use embassy_time::Instant;
//!
//! const ITEMS: [CarouselItem<'static>; 2] = [
//!     CarouselItem::new("a.jpg", "A"),
//!     CarouselItem::new("b.jpg", "B"),
//! ];
//!
//! let config = CarouselConfig::new(&ITEMS).direction(Direction::Right);
//! let mut carousel = Carousel::new(config).unwrap();
//! carousel.mount(Instant::from_millis(0));
//! carousel.tick(Instant::from_millis(3500));
//! assert_eq!(carousel.offset(), -215);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unused_must_use)]
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod autoplay;
pub mod config;
pub mod direction;
pub mod engine;
pub mod fallback;
pub mod item;
pub mod strip;
pub mod transition;

pub use autoplay::{Autoplay, AutoplayExit};
pub use config::{CarouselConfig, ConfigError};
pub use direction::{Direction, Theme};
pub use engine::{Carousel, Lifecycle, TickOutcome, TimerState};
pub use fallback::{FallbackSet, MAX_ITEMS};
pub use item::CarouselItem;
pub use strip::{SlotKey, Strip, StripSlot};
pub use transition::{Easing, Transition};

/// Everything needed to build and drive a carousel.
pub mod prelude {
    pub use crate::autoplay::{Autoplay, AutoplayExit};
    pub use crate::config::{CarouselConfig, ConfigError};
    pub use crate::direction::{Direction, Theme};
    pub use crate::engine::{Carousel, Lifecycle, TickOutcome, TimerState};
    pub use crate::item::CarouselItem;
    pub use crate::transition::Easing;
}
