//! Platform abstractions for the Enchanted Garden carousel
//!
//! This crate provides the trait seams the carousel talks to, so the engine
//! and its renderer can be developed and tested without a real window, image
//! decoder or clock.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (garden-app)
//!         ↓
//! Feature Layers (carousel, ui, garden-components)
//!         ↓
//! Platform (this crate - trait abstractions)
//!         ↓
//! embassy-time / tokio / image decoders
//! ```
//!
//! # Abstractions
//!
//! - [`ImageSource`] - resolve an image locator to a drawable raster
//! - [`TickSource`] - periodic timer driving autoplay
//!
//! # Features
//!
//! - `std`: Enable standard library support (error trait impls)
//! - `mocks`: Export [`mocks`] for downstream tests
//! - `defmt`: Enable defmt derives
//!
//! # Example
//!
//! ```no_run
//! use platform::TickSource;
//!
//! async fn wait_one<T: TickSource>(ticks: &mut T) {
//!     let _fired_at = ticks.next_tick().await;
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded executors, Send bounds not needed

pub mod config;
pub mod image;
pub mod timer;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use image::{ImageError, ImageSource, SolidImage};
pub use timer::TickSource;
