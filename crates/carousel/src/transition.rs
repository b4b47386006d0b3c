//! Offset tween with easing.
//!
//! A [`Transition`] interpolates the strip offset from one value to another
//! over a fixed duration. Sampling is a pure function of the current instant,
//! so a renderer can ask for the offset at any frame without mutating state.

use embassy_time::{Duration, Instant};

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// `t² (3 − 2t)`
    Smoothstep,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`
    #[default]
    EaseInOut,
    /// Arbitrary CSS-style cubic bezier `(x1, y1, x2, y2)`.
    ///
    /// `x1` and `x2` are clamped to `0.0..=1.0` so the curve stays a function
    /// of time.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` to eased progress.
    #[allow(clippy::arithmetic_side_effects)] // f32 math cannot panic
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier(x1, y1, x2, y2) => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, t)
            }
        }
    }
}

/// One coordinate of a cubic bezier with endpoints fixed at 0 and 1.
#[allow(clippy::arithmetic_side_effects)]
fn bezier_component(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

/// Solve `x(s) = x` by bisection, then return `y(s)`.
///
/// x(s) is monotone for control points inside `0..=1`, so bisection always
/// converges; 24 halvings is below f32 resolution on the unit interval.
#[allow(clippy::arithmetic_side_effects)]
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if bezier_component(x1, x2, mid) < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    bezier_component(y1, y2, (lo + hi) * 0.5)
}

/// Animated move of the strip offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: i32,
    to: i32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    /// Start a transition at `start`.
    ///
    /// A zero duration is treated as one tick of the time base so progress
    /// never divides by zero.
    pub fn new(from: i32, to: i32, start: Instant, duration: Duration, easing: Easing) -> Self {
        let duration = if duration.as_ticks() == 0 {
            Duration::from_ticks(1)
        } else {
            duration
        };
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Offset the transition started from
    pub fn from(&self) -> i32 {
        self.from
    }

    /// Offset the transition lands on
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Instant the transition started
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Length of the transition
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the transition has landed at `now`.
    pub fn is_done(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }

    /// Linear progress in `0.0..=1.0` at `now`.
    #[allow(clippy::cast_precision_loss)] // tick counts of an 800 ms animation fit f32 exactly
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = self.elapsed(now).as_ticks() as f32;
        let total = self.duration.as_ticks() as f32;
        (elapsed / total).clamp(0.0, 1.0)
    }

    /// Eased offset at `now`, rounded to the nearest pixel.
    #[allow(clippy::arithmetic_side_effects)] // f32 math cannot panic; casts saturate
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, now: Instant) -> i32 {
        if self.is_done(now) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(now));
        let from = self.from as f32;
        let to = self.to as f32;
        let v = from + (to - from) * eased;
        if v >= 0.0 {
            (v + 0.5) as i32
        } else {
            (v - 0.5) as i32
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        now.checked_duration_since(self.start)
            .unwrap_or(Duration::from_ticks(0))
    }
}
