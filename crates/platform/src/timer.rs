//! Periodic timer abstraction
//!
//! Autoplay is driven by anything that can produce a stream of tick instants.
//! On device that is an [`embassy_time::Ticker`]; the desktop runner adapts a
//! tokio interval; tests use [`crate::mocks::MockTicks`].
//!
//! A tick source has no cancel method. Cancellation is dropping the future
//! that is awaiting it.

use embassy_time::{Instant, Ticker};

/// Source of periodic ticks.
pub trait TickSource {
    /// Wait for the next tick and return the instant it fired.
    fn next_tick(&mut self) -> impl core::future::Future<Output = Instant>;
}

impl<T: TickSource> TickSource for &mut T {
    async fn next_tick(&mut self) -> Instant {
        (**self).next_tick().await
    }
}

impl TickSource for Ticker {
    async fn next_tick(&mut self) -> Instant {
        self.next().await;
        Instant::now()
    }
}
