//! Looping and one-shot motion curves for decorative elements.
//!
//! Everything here is a pure function of elapsed time so a frame can be
//! rendered for any instant.

use carousel::Easing;
use embassy_time::Duration;

/// Triangle wave between `-amplitude` and `+amplitude`.
///
/// Starts at `-amplitude`, peaks at half `period`, and is back at
/// `-amplitude` after a full period. A zero period holds at `-amplitude`.
pub fn oscillate(elapsed: Duration, period: Duration, amplitude: i32) -> i32 {
    let period = period.as_millis();
    let Some(phase) = elapsed.as_millis().checked_rem(period) else {
        return amplitude.saturating_neg();
    };
    let half = period / 2;
    // Distance from the trough, in 0..=half.
    let rise = if phase <= half {
        phase
    } else {
        period.saturating_sub(phase)
    };
    let span = i64::from(amplitude).saturating_mul(2);
    let offset = i64::try_from(rise)
        .unwrap_or(i64::MAX)
        .saturating_mul(span)
        .checked_div(i64::try_from(half).unwrap_or(i64::MAX))
        .unwrap_or(0);
    let value = offset.saturating_sub(i64::from(amplitude));
    i32::try_from(value).unwrap_or(amplitude)
}

/// One-off slide-in played when a carousel first appears.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    /// Horizontal distance the card starts away from its resting place
    pub distance: i32,
    /// Time after mount before the card appears
    pub delay: Duration,
    /// Length of the slide
    pub duration: Duration,
}

/// Where the entrance animation stands at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceState {
    /// Not yet visible
    Hidden,
    /// Visible, shifted horizontally by `dx`
    Sliding {
        /// Current horizontal shift
        dx: i32,
    },
    /// At rest
    Settled,
}

impl Entrance {
    /// 50 px over 1 s after a 2.5 s delay
    pub const DEFAULT: Self = Self {
        distance: 50,
        delay: Duration::from_millis(2500),
        duration: Duration::from_millis(1000),
    };

    /// State `elapsed` after mount; `sign` is the side the card comes from.
    #[allow(clippy::arithmetic_side_effects)] // f32 math cannot panic
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn at(&self, elapsed: Duration, sign: i32) -> EntranceState {
        let Some(into) = elapsed.checked_sub(self.delay) else {
            return EntranceState::Hidden;
        };
        if into >= self.duration || self.duration.as_ticks() == 0 {
            return EntranceState::Settled;
        }
        let t = into.as_ticks() as f32 / self.duration.as_ticks() as f32;
        let remaining = 1.0 - Easing::EaseInOut.apply(t);
        let dx = (self.distance.saturating_mul(sign) as f32 * remaining) as i32;
        EntranceState::Sliding { dx }
    }
}

impl Default for Entrance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_oscillate_shape() {
        let period = ms(3000);
        assert_eq!(oscillate(ms(0), period, 5), -5);
        assert_eq!(oscillate(ms(750), period, 5), 0);
        assert_eq!(oscillate(ms(1500), period, 5), 5);
        assert_eq!(oscillate(ms(3000), period, 5), -5);
    }

    #[test]
    fn test_oscillate_stays_in_range() {
        for t in (0..6000).step_by(37) {
            let v = oscillate(ms(t), ms(2000), 5);
            assert!((-5..=5).contains(&v), "{v} at {t}");
        }
    }

    #[test]
    fn test_oscillate_zero_period() {
        assert_eq!(oscillate(ms(100), ms(0), 5), -5);
    }

    #[test]
    fn test_entrance_phases() {
        let e = Entrance::DEFAULT;
        assert_eq!(e.at(ms(0), 1), EntranceState::Hidden);
        assert_eq!(e.at(ms(2499), 1), EntranceState::Hidden);
        assert_eq!(e.at(ms(2500), 1), EntranceState::Sliding { dx: 50 });
        assert_eq!(e.at(ms(2500), -1), EntranceState::Sliding { dx: -50 });
        assert_eq!(e.at(ms(3500), 1), EntranceState::Settled);
    }

    #[test]
    fn test_entrance_moves_towards_rest() {
        let e = Entrance::DEFAULT;
        let EntranceState::Sliding { dx: early } = e.at(ms(2700), 1) else {
            panic!("expected sliding");
        };
        let EntranceState::Sliding { dx: late } = e.at(ms(3300), 1) else {
            panic!("expected sliding");
        };
        assert!(early > late && late >= 0);
    }
}
