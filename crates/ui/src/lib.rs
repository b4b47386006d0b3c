//! Carousel instances shown on the page.
//!
//! Pure configuration: the two named carousels, their image lists and their
//! display metadata. This crate is `no_std`; it only uses `core` and the
//! `carousel` types.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod instances;

pub use instances::{memories, personal, CarouselId, MEMORIES_ITEMS, PERSONAL_ITEMS};
