//! Scroll direction and colour theme selectors.

/// Which way the strip moves on every tick.
///
/// Fixed for the lifetime of a carousel. `Left` produces positive offsets,
/// `Right` negative ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Positive offsets
    #[default]
    Left,
    /// Negative offsets
    Right,
}

impl Direction {
    /// Sign applied to the per-tick offset.
    pub const fn sign(self) -> i32 {
        match self {
            Self::Left => 1,
            Self::Right => -1,
        }
    }

    /// Arrow drawn by the direction indicator.
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Left => "<-",
            Self::Right => "->",
        }
    }

    /// Lowercase name, used in logs and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour theme of a carousel.
///
/// Renderers map each variant through an exhaustive palette table, so an
/// unknown theme cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Theme {
    /// Rose tones
    #[default]
    Pink,
    /// Emerald tones
    Green,
}

impl Theme {
    /// Lowercase name, used in logs and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pink => "pink",
            Self::Green => "green",
        }
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
