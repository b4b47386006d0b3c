//! Carousel state machine.
//!
//! `Carousel` is a pure, `no_std`, allocation-free state machine. It owns the
//! index within the current cycle, the running offset transition, the mount
//! lifecycle, and the record of items whose image failed to load.
//!
//! It has no I/O: it does not arm timers, load images or draw. The autoplay
//! task calls [`Carousel::tick`], and the renderer samples
//! [`Carousel::rendered_offset`] and walks [`Carousel::strip`].
//!
//! The index is normalised: when a tick arrives after a full cycle has
//! landed, the index wraps to zero and the in-flight offset is shifted back
//! by one cycle. Because the strip repeats every cycle, the shift is
//! invisible, and the offset stays bounded however long the carousel runs.

use embassy_time::{Duration, Instant};

use crate::config::{CarouselConfig, ConfigError};
use crate::fallback::FallbackSet;
use crate::item::CarouselItem;
use crate::strip::{saturate_i32, slot_x, wrap_into_cycle, Strip, StripSlot};
use crate::transition::Transition;

/// Where the carousel is in its mount lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Constructed, not yet on screen
    Created,
    /// On screen; ticks advance the strip
    Mounted,
    /// Removed from screen; ticks are ignored from now on
    Unmounted,
}

/// State of the autoplay timer after [`Carousel::mount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Timer should fire every `period`
    Armed {
        /// Tick cadence
        period: Duration,
    },
    /// No timer: nothing to animate, or the carousel was unmounted
    Idle,
}

/// Result of a [`Carousel::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The strip moved one stride
    Advanced {
        /// Index within the cycle after the tick, `1..=len`
        index: u32,
        /// Resting offset after the tick
        offset: i32,
        /// Whether the index wrapped before advancing
        normalized: bool,
    },
    /// Not mounted, already unmounted, or no items
    Ignored,
}

/// Looping carousel engine.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    config: CarouselConfig<'a>,
    lifecycle: Lifecycle,
    index: u32,
    ticks: u64,
    transition: Option<Transition>,
    fallbacks: FallbackSet,
    mounted_at: Option<Instant>,
}

impl<'a> Carousel<'a> {
    /// Create a carousel in the [`Lifecycle::Created`] state.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`CarouselConfig::validate`].
    pub fn new(config: CarouselConfig<'a>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            lifecycle: Lifecycle::Created,
            index: 0,
            ticks: 0,
            transition: None,
            fallbacks: FallbackSet::new(),
            mounted_at: None,
        })
    }

    /// Put the carousel on screen.
    ///
    /// Returns [`TimerState::Armed`] with the tick period when there is
    /// something to animate. An empty carousel mounts but arms nothing.
    /// Mounting twice is a no-op; an unmounted carousel cannot be remounted.
    pub fn mount(&mut self, now: Instant) -> TimerState {
        match self.lifecycle {
            Lifecycle::Created => {
                self.lifecycle = Lifecycle::Mounted;
                self.mounted_at = Some(now);
                info!(
                    "carousel '{}' mounted: {} items, direction {}",
                    self.config.title,
                    self.config.items.len(),
                    self.config.direction.as_str()
                );
            }
            Lifecycle::Mounted => {}
            Lifecycle::Unmounted => {
                warn!("carousel '{}' cannot be remounted", self.config.title);
            }
        }
        self.timer_state()
    }

    /// Take the carousel off screen. Later ticks are ignored.
    pub fn unmount(&mut self) {
        if self.lifecycle != Lifecycle::Unmounted {
            info!(
                "carousel '{}' unmounted after {} ticks",
                self.config.title,
                self.ticks
            );
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.transition = None;
    }

    /// Timer state implied by the current lifecycle and item count.
    pub fn timer_state(&self) -> TimerState {
        if self.is_autoplay_armed() {
            TimerState::Armed {
                period: self.config.tick_interval,
            }
        } else {
            TimerState::Idle
        }
    }

    /// Whether an autoplay timer should be running.
    pub fn is_autoplay_armed(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted && !self.config.items.is_empty()
    }

    /// Advance one stride in the configured direction.
    ///
    /// The animated move starts from wherever the strip is drawn at `now`, so
    /// a tick that lands mid-transition retargets smoothly.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if !self.is_autoplay_armed() {
            trace!("tick ignored for '{}'", self.config.title);
            return TickOutcome::Ignored;
        }

        let mut from = self.rendered_offset(now);
        let mut normalized = false;
        if self.index >= self.len_u32() {
            let cycle = self.offset_for(self.len_u32());
            from = from.saturating_sub(cycle);
            self.index = 0;
            normalized = true;
            debug!("carousel '{}' wrapped after a full cycle", self.config.title);
        }

        self.index = self.index.saturating_add(1);
        self.ticks = self.ticks.saturating_add(1);
        let to = self.offset();
        self.transition = Some(Transition::new(
            from,
            to,
            now,
            self.config.transition,
            self.config.easing,
        ));
        trace!(
            "tick '{}': index={} offset={}",
            self.config.title,
            self.index,
            to
        );

        TickOutcome::Advanced {
            index: self.index,
            offset: to,
            normalized,
        }
    }

    /// Resting offset for the current index: `sign * index * stride`.
    pub fn offset(&self) -> i32 {
        self.offset_for(self.index)
    }

    /// Offset the strip is drawn at `now`, mid-transition or resting.
    pub fn rendered_offset(&self, now: Instant) -> i32 {
        match &self.transition {
            Some(t) if !t.is_done(now) => t.sample(now),
            _ => self.offset(),
        }
    }

    /// Whether a transition is still moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.as_ref().is_some_and(|t| !t.is_done(now))
    }

    /// Every slot of the tripled strip.
    pub fn strip(&self) -> Strip<'a> {
        Strip::new(self.config.items)
    }

    /// Slots that overlap a viewport `viewport_width` pixels wide at `now`,
    /// paired with their x coordinate relative to the viewport.
    ///
    /// `inset` is where the first tile of the middle repetition rests, in
    /// viewport coordinates. The rendered offset is first shifted by whole
    /// cycles towards zero, so a slot may come from a different repetition
    /// than the raw offset implies. The picture is identical. The iterator does not borrow the
    /// carousel, so failures can be recorded while walking it.
    pub fn visible_slots(
        &self,
        inset: i32,
        viewport_width: u32,
        now: Instant,
    ) -> impl Iterator<Item = (StripSlot<'a>, i32)> {
        let len = self.config.items.len();
        let stride = self.config.stride();
        let offset = wrap_into_cycle(self.rendered_offset(now), len, stride);
        let width = i64::from(self.config.item_width);
        let viewport = i64::from(viewport_width);
        self.strip()
            .map(move |slot| {
                let x = slot_x(slot.position, len, stride, offset).saturating_add(inset);
                (slot, x)
            })
            .filter(move |(_, x)| {
                let x = i64::from(*x);
                x.saturating_add(width) > 0 && x < viewport
            })
    }

    /// Remember that `item_index` failed to load.
    ///
    /// Returns `true` the first time an item is recorded.
    pub fn record_image_failure(&mut self, item_index: usize) -> bool {
        let fresh = self.fallbacks.insert(item_index);
        if fresh {
            let src = self
                .config
                .items
                .get(item_index)
                .map_or("?", |item| item.src);
            warn!("image '{}' failed to load, showing placeholder", src);
        }
        fresh
    }

    /// Whether `item_index` is shown as a placeholder.
    pub fn shows_placeholder(&self, item_index: usize) -> bool {
        self.fallbacks.contains(item_index)
    }

    /// Items shown as placeholders
    pub fn fallbacks(&self) -> FallbackSet {
        self.fallbacks
    }

    /// Index within the current cycle, `0..=len`
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Ticks since mount. Never wraps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current lifecycle state
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Instant the carousel was mounted
    pub fn mounted_at(&self) -> Option<Instant> {
        self.mounted_at
    }

    /// Configuration
    pub fn config(&self) -> &CarouselConfig<'a> {
        &self.config
    }

    /// Items in display order
    pub fn items(&self) -> &'a [CarouselItem<'a>] {
        self.config.items
    }

    /// Pixels moved per tick
    pub fn stride(&self) -> u32 {
        self.config.stride()
    }

    fn len_u32(&self) -> u32 {
        // Bounded by MAX_ITEMS through validation.
        u32::try_from(self.config.items.len()).unwrap_or(u32::MAX)
    }

    fn offset_for(&self, index: u32) -> i32 {
        let magnitude = i64::from(index).saturating_mul(i64::from(self.config.stride()));
        saturate_i32(magnitude.saturating_mul(i64::from(self.config.direction.sign())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;

    const ITEMS: [CarouselItem<'static>; 2] =
        [CarouselItem::new("a.jpg", "A"), CarouselItem::new("b.jpg", "B")];

    fn ms(v: u64) -> Instant {
        Instant::from_millis(v)
    }

    fn mounted(direction: Direction) -> Carousel<'static> {
        let mut c = Carousel::new(CarouselConfig::new(&ITEMS).direction(direction)).unwrap();
        c.mount(ms(0));
        c
    }

    #[test]
    fn test_starts_created_at_rest() {
        let c = Carousel::new(CarouselConfig::new(&ITEMS)).unwrap();
        assert_eq!(c.lifecycle(), Lifecycle::Created);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.timer_state(), TimerState::Idle);
    }

    #[test]
    fn test_mount_arms_timer() {
        let mut c = Carousel::new(CarouselConfig::new(&ITEMS)).unwrap();
        assert_eq!(
            c.mount(ms(0)),
            TimerState::Armed {
                period: Duration::from_millis(3500)
            }
        );
        assert_eq!(c.mounted_at(), Some(ms(0)));
    }

    #[test]
    fn test_tick_before_mount_is_ignored() {
        let mut c = Carousel::new(CarouselConfig::new(&ITEMS)).unwrap();
        assert_eq!(c.tick(ms(3500)), TickOutcome::Ignored);
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn test_left_offsets() {
        let mut c = mounted(Direction::Left);
        c.tick(ms(3500));
        assert_eq!(c.offset(), 215);
        c.tick(ms(7000));
        assert_eq!(c.offset(), 430);
    }

    #[test]
    fn test_right_offsets() {
        let mut c = mounted(Direction::Right);
        c.tick(ms(3500));
        assert_eq!(c.offset(), -215);
        c.tick(ms(7000));
        assert_eq!(c.offset(), -430);
    }

    #[test]
    fn test_rendered_offset_animates_then_rests() {
        let mut c = mounted(Direction::Left);
        c.tick(ms(3500));
        assert_eq!(c.rendered_offset(ms(3500)), 0);
        let mid = c.rendered_offset(ms(3900));
        assert!(mid > 0 && mid < 215, "mid-transition offset {mid}");
        assert!(c.is_animating(ms(3900)));
        assert_eq!(c.rendered_offset(ms(4300)), 215);
        assert!(!c.is_animating(ms(4300)));
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut c = mounted(Direction::Left);
        c.tick(ms(3500));
        c.tick(ms(7000));
        assert_eq!(c.index(), 2);
        let outcome = c.tick(ms(10_500));
        assert_eq!(
            outcome,
            TickOutcome::Advanced {
                index: 1,
                offset: 215,
                normalized: true
            }
        );
        assert_eq!(c.ticks(), 3);
        // The move after wrapping starts from zero, exactly like the first tick.
        assert_eq!(c.rendered_offset(ms(10_500)), 0);
    }

    #[test]
    fn test_wrap_mid_transition_is_seamless() {
        let items = [CarouselItem::new("a.jpg", "A")];
        let mut c = Carousel::new(
            CarouselConfig::new(&items)
                .tick_interval(Duration::from_millis(1000))
                .transition(Duration::from_millis(800)),
        )
        .unwrap();
        c.mount(ms(0));
        c.tick(ms(0));
        // Retarget at 400 ms while still moving towards 215.
        let before = c.rendered_offset(ms(400));
        c.tick(ms(400));
        let after = c.rendered_offset(ms(400));
        assert_eq!(after, before - 215);
    }

    #[test]
    fn test_empty_never_arms() {
        let mut c = Carousel::new(CarouselConfig::new(&[])).unwrap();
        assert_eq!(c.mount(ms(0)), TimerState::Idle);
        assert_eq!(c.tick(ms(3500)), TickOutcome::Ignored);
        assert_eq!(c.strip().count(), 0);
    }

    #[test]
    fn test_unmount_stops_ticks() {
        let mut c = mounted(Direction::Left);
        c.tick(ms(3500));
        c.unmount();
        assert_eq!(c.tick(ms(7000)), TickOutcome::Ignored);
        assert_eq!(c.offset(), 215);
        assert_eq!(c.ticks(), 1);
        assert_eq!(c.timer_state(), TimerState::Idle);
    }

    #[test]
    fn test_unmounted_cannot_remount() {
        let mut c = mounted(Direction::Left);
        c.unmount();
        assert_eq!(c.mount(ms(10)), TimerState::Idle);
        assert_eq!(c.lifecycle(), Lifecycle::Unmounted);
    }

    #[test]
    fn test_visible_slots_cover_viewport() {
        let c = mounted(Direction::Left);
        // 430 px viewport, stride 215, tile 200: slots 2 and 3 (middle copy).
        let visible: Vec<(usize, i32)> = c
            .visible_slots(0, 430, ms(0))
            .map(|(slot, x)| (slot.position, x))
            .collect();
        assert_eq!(visible, [(2, 0), (3, 215)]);
    }

    #[test]
    fn test_visible_slots_with_inset() {
        let c = mounted(Direction::Left);
        // A 32 px inset pulls the tail of slot 1 into view.
        let positions: Vec<usize> = c
            .visible_slots(32, 430, ms(0))
            .map(|(slot, _)| slot.position)
            .collect();
        assert_eq!(positions, [1, 2, 3]);
    }

    #[test]
    fn test_offset_exact_at_longest_cycle() {
        let items = [CarouselItem::new("a.jpg", "A")];
        let config = CarouselConfig::new(&items)
            .direction(Direction::Right)
            .item_size(u32::MAX / 2, 300)
            .gap(0);
        let mut c = Carousel::new(config).unwrap();
        c.mount(ms(0));
        for k in 1..=3u64 {
            c.tick(ms(k * 3500));
            assert_eq!(c.offset(), -i32::MAX);
            assert_eq!(c.rendered_offset(ms(k * 3500 + 800)), -i32::MAX);
        }
    }

    #[test]
    fn test_oversized_cycle_rejected() {
        let config = CarouselConfig::new(&ITEMS).item_size(1_500_000_000, 300).gap(0);
        assert!(matches!(
            Carousel::new(config),
            Err(ConfigError::CycleTooLong { .. })
        ));
    }

    #[test]
    fn test_image_failure_is_per_item() {
        let mut c = mounted(Direction::Left);
        assert!(c.record_image_failure(1));
        assert!(!c.record_image_failure(1));
        assert!(c.shows_placeholder(1));
        assert!(!c.shows_placeholder(0));
    }
}
