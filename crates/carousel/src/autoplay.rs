//! Autoplay driver.
//!
//! Binds a [`Carousel`] to a [`TickSource`]: every tick fired by the source
//! advances the carousel once. The carousel lives in a `RefCell` so the
//! renderer can read it between ticks on the same executor.
//!
//! There is no explicit stop. Dropping the [`Autoplay::run`] future cancels
//! the timer; unmounting the carousel makes the next tick end the loop.

use core::cell::RefCell;

use platform::TickSource;

use crate::engine::{Carousel, TickOutcome};

/// Why [`Autoplay::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AutoplayExit {
    /// The carousel was not mounted or has no items; no timer was armed
    NothingToAnimate,
    /// The carousel was unmounted while the timer was running
    Unmounted,
}

/// Periodic driver for one carousel.
pub struct Autoplay<'c, 'a, T: TickSource> {
    carousel: &'c RefCell<Carousel<'a>>,
    ticks: T,
}

impl<'c, 'a, T: TickSource> Autoplay<'c, 'a, T> {
    /// Drive `carousel` from `ticks`.
    pub fn new(carousel: &'c RefCell<Carousel<'a>>, ticks: T) -> Self {
        Self { carousel, ticks }
    }

    /// Run until the carousel stops accepting ticks.
    ///
    /// Returns immediately with [`AutoplayExit::NothingToAnimate`] when the
    /// carousel is not armed, so an empty carousel never waits on the timer.
    pub async fn run(mut self) -> AutoplayExit {
        if !self.carousel.borrow().is_autoplay_armed() {
            debug!("autoplay not armed");
            return AutoplayExit::NothingToAnimate;
        }

        loop {
            let now = self.ticks.next_tick().await;
            let Ok(mut carousel) = self.carousel.try_borrow_mut() else {
                // Renderer holds the carousel across an await; skip this tick.
                warn!("carousel busy, tick skipped");
                continue;
            };
            match carousel.tick(now) {
                TickOutcome::Advanced { .. } => {}
                TickOutcome::Ignored => {
                    debug!("autoplay stopped");
                    return AutoplayExit::Unmounted;
                }
            }
        }
    }

    /// Give the tick source back.
    pub fn into_ticks(self) -> T {
        self.ticks
    }
}

impl<'c, 'a> Autoplay<'c, 'a, embassy_time::Ticker> {
    /// Drive `carousel` from an embassy ticker at its configured interval.
    pub fn with_ticker(carousel: &'c RefCell<Carousel<'a>>) -> Self {
        let period = carousel.borrow().config().tick_interval;
        Self::new(carousel, embassy_time::Ticker::every(period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarouselConfig;
    use crate::item::CarouselItem;
    use embassy_time::{Duration, Instant};
    use platform::mocks::MockTicks;

    const ITEMS: [CarouselItem<'static>; 2] =
        [CarouselItem::new("a.jpg", "A"), CarouselItem::new("b.jpg", "B")];

    #[tokio::test]
    async fn test_empty_carousel_returns_immediately() {
        let mut c = Carousel::new(CarouselConfig::new(&[])).unwrap();
        c.mount(Instant::from_millis(0));
        let cell = RefCell::new(c);
        let mut ticks = MockTicks::every(Duration::from_millis(3500), 3);
        let exit = Autoplay::new(&cell, &mut ticks).run().await;
        assert_eq!(exit, AutoplayExit::NothingToAnimate);
        assert_eq!(ticks.delivered(), 0);
    }

    #[tokio::test]
    async fn test_ticks_advance_until_cancelled() {
        let mut c = Carousel::new(CarouselConfig::new(&ITEMS)).unwrap();
        c.mount(Instant::from_millis(0));
        let cell = RefCell::new(c);
        let ticks = MockTicks::every(Duration::from_millis(3500), 2);
        let run = Autoplay::new(&cell, ticks).run();
        // Script exhausted: the driver waits forever until the future is dropped.
        let waited = tokio::time::timeout(std::time::Duration::from_millis(20), run).await;
        assert!(waited.is_err());
        assert_eq!(cell.borrow().offset(), 430);
        assert_eq!(cell.borrow().ticks(), 2);
    }

    #[tokio::test]
    async fn test_with_ticker_runs_at_configured_interval() {
        let config = CarouselConfig::new(&ITEMS)
            .tick_interval(Duration::from_millis(20))
            .transition(Duration::from_millis(10));
        let mut c = Carousel::new(config).unwrap();
        c.mount(Instant::now());
        let cell = RefCell::new(c);
        let run = Autoplay::with_ticker(&cell).run();
        let waited = tokio::time::timeout(std::time::Duration::from_millis(200), run).await;
        assert!(waited.is_err(), "ticker keeps firing while mounted");
        assert!(cell.borrow().ticks() >= 1);
    }
}
