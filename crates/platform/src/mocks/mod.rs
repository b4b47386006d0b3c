//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits for use
//! in unit and integration tests across the workspace. Enable the `mocks`
//! feature to use them from another crate.

use crate::{ImageError, ImageSource, SolidImage, TickSource};
use embassy_time::{Duration, Instant};
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

/// Mock image source
///
/// Every locator loads as a solid image in the configured colour, except the
/// ones registered with [`MockImageSource::fail`], which report
/// [`ImageError::NotFound`]. Each request is recorded so tests can check that
/// a failing locator is not retried.
pub struct MockImageSource {
    color: Rgb888,
    failing: heapless::Vec<&'static str, 16>,
    requests: heapless::Vec<heapless::String<64>, 128>,
}

impl MockImageSource {
    /// Create a mock that loads everything in mid grey
    pub fn new() -> Self {
        Self {
            color: Rgb888::new(0x80, 0x80, 0x80),
            failing: heapless::Vec::new(),
            requests: heapless::Vec::new(),
        }
    }

    /// Set the colour returned for successful loads
    pub fn with_color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Make `src` fail to load. Silently ignored once 16 locators are registered.
    pub fn fail(mut self, src: &'static str) -> Self {
        self.failing.push(src).ok();
        self
    }

    /// Total number of load requests seen
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }

    /// Number of load requests seen for `src`
    pub fn requests_for(&self, src: &str) -> usize {
        self.requests.iter().filter(|r| r.as_str() == src).count()
    }
}

impl Default for MockImageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSource for MockImageSource {
    type Image = SolidImage;

    fn load(&mut self, src: &str, size: Size) -> Result<Self::Image, ImageError> {
        let mut recorded = heapless::String::new();
        if recorded.push_str(src).is_ok() {
            // Bounded log: requests beyond capacity are not recorded.
            self.requests.push(recorded).ok();
        }

        if self.failing.iter().any(|f| *f == src) {
            Err(ImageError::NotFound)
        } else {
            Ok(SolidImage::new(size, self.color))
        }
    }
}

/// Mock tick source
///
/// Yields a fixed script of instants immediately, then stays pending
/// forever, the way a real timer would between ticks.
pub struct MockTicks {
    script: heapless::Deque<Instant, 64>,
    delivered: usize,
}

impl MockTicks {
    /// Script `count` ticks spaced `period` apart, the first at `period`.
    ///
    /// At most 64 ticks are scripted.
    pub fn every(period: Duration, count: usize) -> Self {
        let mut script = heapless::Deque::new();
        let mut at = Instant::from_ticks(0);
        for _ in 0..count {
            at = match at.checked_add(period) {
                Some(next) => next,
                None => break,
            };
            if script.push_back(at).is_err() {
                break;
            }
        }
        Self {
            script,
            delivered: 0,
        }
    }

    /// Script ticks at exactly the given instants.
    pub fn at(instants: &[Instant]) -> Self {
        let mut script = heapless::Deque::new();
        for at in instants {
            if script.push_back(*at).is_err() {
                break;
            }
        }
        Self {
            script,
            delivered: 0,
        }
    }

    /// Ticks still waiting to be delivered
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Ticks delivered so far
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl TickSource for MockTicks {
    async fn next_tick(&mut self) -> Instant {
        match self.script.pop_front() {
            Some(at) => {
                self.delivered = self.delivered.saturating_add(1);
                at
            }
            None => core::future::pending().await,
        }
    }
}
