//! Theme colours

use carousel::Theme;
use embedded_graphics::pixelcolor::Rgb888;

/// Every colour a carousel draws with, for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Card background behind the strip
    pub background: Rgb888,
    /// Title band
    pub header: Rgb888,
    /// Title text
    pub title: Rgb888,
    /// Subtitle text
    pub subtitle: Rgb888,
    /// Caption pill behind each label
    pub label: Rgb888,
    /// Caption text
    pub label_text: Rgb888,
    /// Floating accent on each tile
    pub floating: Rgb888,
    /// Fill of the placeholder shown when an image fails
    pub placeholder: Rgb888,
    /// Placeholder caption
    pub placeholder_text: Rgb888,
    /// Direction indicator arrow and caption
    pub indicator: Rgb888,
}

const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
const WHITE_60: Rgb888 = Rgb888::new(0x99, 0x99, 0x99);

const PINK: Palette = Palette {
    background: Rgb888::new(0x50, 0x07, 0x24),
    header: Rgb888::new(0x83, 0x18, 0x43),
    title: WHITE,
    subtitle: Rgb888::new(0xFB, 0xCF, 0xE8),
    label: Rgb888::new(0xEC, 0x48, 0x99),
    label_text: WHITE,
    floating: Rgb888::new(0xF9, 0xA8, 0xD4),
    placeholder: Rgb888::new(0xEC, 0x48, 0x99),
    placeholder_text: WHITE,
    indicator: WHITE_60,
};

const GREEN: Palette = Palette {
    background: Rgb888::new(0x02, 0x2C, 0x22),
    header: Rgb888::new(0x06, 0x4E, 0x3B),
    title: WHITE,
    subtitle: Rgb888::new(0xA7, 0xF3, 0xD0),
    label: Rgb888::new(0x10, 0xB9, 0x81),
    label_text: WHITE,
    floating: Rgb888::new(0x6E, 0xE7, 0xB7),
    placeholder: Rgb888::new(0x10, 0xB9, 0x81),
    placeholder_text: WHITE,
    indicator: WHITE_60,
};

impl Palette {
    /// Palette of `theme`
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Pink => PINK,
            Theme::Green => GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_colours() {
        assert_eq!(
            Palette::for_theme(Theme::Pink).placeholder,
            Rgb888::new(0xEC, 0x48, 0x99)
        );
        assert_eq!(
            Palette::for_theme(Theme::Green).placeholder,
            Rgb888::new(0x10, 0xB9, 0x81)
        );
    }

    #[test]
    fn test_themes_differ() {
        let pink = Palette::for_theme(Theme::Pink);
        let green = Palette::for_theme(Theme::Green);
        assert_ne!(pink.header, green.header);
        assert_ne!(pink.floating, green.floating);
        assert_eq!(pink.title, green.title);
    }
}
