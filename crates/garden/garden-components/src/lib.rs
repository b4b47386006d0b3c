//! Enchanted Garden UI components
//!
//! `embedded-graphics` components that draw a [`carousel::Carousel`] onto any
//! `DrawTarget<Color = Rgb888>`.
//!
//! # Components
//!
//! - `Palette` - theme colour table
//! - `Placeholder` - fallback graphic for images that fail to load
//! - `ImageTile` - image, caption pill and floating accent
//! - `Header` - title band
//! - `DirectionIndicator` - scrolling direction hint
//! - `CarouselView` - the whole card, driving the engine
//!
//! # Example
//!
//! ```no_run
//! use garden_components::prelude::*;
//! use embedded_graphics::{prelude::*, primitives::Rectangle};
//!
//! let view = CarouselView::new(Rectangle::new(Point::zero(), Size::new(800, 420)));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod carousel_view;
pub mod header;
pub mod indicator;
pub mod motion;
pub mod palette;
pub mod placeholder;
pub mod tile;

/// Every component, for glob import
pub mod prelude {
    pub use crate::carousel_view::*;
    pub use crate::header::*;
    pub use crate::indicator::*;
    pub use crate::motion::*;
    pub use crate::palette::*;
    pub use crate::placeholder::*;
    pub use crate::tile::*;
}
