//! Desktop runner for the Enchanted Garden carousels
//!
//! Renders the carousel instances headlessly, either frame by frame on a
//! virtual clock ([`render`]) or in real time with tokio timers ([`live`]).

// Desktop crate: panics and unchecked arithmetic acceptable outside embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(missing_docs)]

pub mod images;
pub mod live;
pub mod render;
pub mod scene;
pub mod ticks;

pub use images::{FsImageSource, RasterImage};
pub use scene::Scene;
