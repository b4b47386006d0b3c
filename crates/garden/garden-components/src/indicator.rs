//! Direction indicator: arrow plus "Sliding" caption at the strip's edge

use carousel::Direction;
use embassy_time::Duration;
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::Rgb888,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::motion::oscillate;

/// Caption under the arrow
pub const INDICATOR_TEXT: &str = "Sliding";
/// Horizontal nudge either side of rest
pub const NUDGE: i32 = 5;
/// Period of one nudge
pub const NUDGE_PERIOD: Duration = Duration::from_millis(2000);

/// Arrow pointing the way the strip scrolls.
pub struct DirectionIndicator {
    direction: Direction,
    color: Rgb888,
    nudge: i32,
}

impl DirectionIndicator {
    pub fn new(direction: Direction, color: Rgb888) -> Self {
        Self {
            direction,
            color,
            nudge: 0,
        }
    }

    /// Set the nudge for `elapsed` after mount.
    ///
    /// Left starts at -5 and swings to +5; Right mirrors it.
    pub fn at(mut self, elapsed: Duration) -> Self {
        let swing = oscillate(elapsed, NUDGE_PERIOD, NUDGE);
        self.nudge = match self.direction {
            Direction::Left => swing,
            Direction::Right => swing.saturating_neg(),
        };
        self
    }

    /// Current horizontal nudge
    pub fn nudge(&self) -> i32 {
        self.nudge
    }

    /// Render centred on `anchor`, shifted by the nudge
    pub fn render<D>(&self, display: &mut D, anchor: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let center = anchor + Point::new(self.nudge, 0);
        let arrow_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Bottom)
            .build();
        Text::with_text_style(
            self.direction.arrow(),
            center,
            MonoTextStyle::new(&FONT_10X20, self.color),
            arrow_style,
        )
        .draw(display)?;

        let caption_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(
            INDICATOR_TEXT,
            center + Point::new(0, 4),
            MonoTextStyle::new(&FONT_6X10, self.color),
            caption_style,
        )
        .draw(display)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_mirrors_direction() {
        let t = Duration::from_millis(0);
        let left = DirectionIndicator::new(Direction::Left, Rgb888::WHITE).at(t);
        let right = DirectionIndicator::new(Direction::Right, Rgb888::WHITE).at(t);
        assert_eq!(left.nudge(), -5);
        assert_eq!(right.nudge(), 5);
    }

    #[test]
    fn test_nudge_peaks_mid_period() {
        let ind = DirectionIndicator::new(Direction::Left, Rgb888::WHITE)
            .at(Duration::from_millis(1000));
        assert_eq!(ind.nudge(), NUDGE);
    }
}
