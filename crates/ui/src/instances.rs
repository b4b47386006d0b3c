//! The "Memories" and "Personal" carousels.

use carousel::{CarouselConfig, CarouselItem, Direction, Theme};

/// Images of the "Memories" carousel
pub const MEMORIES_ITEMS: [CarouselItem<'static>; 10] = [
    CarouselItem::new("/images/memories/m1.jpg", "Memory 1"),
    CarouselItem::new("/images/memories/m2.jpg", "Memory 2"),
    CarouselItem::new("/images/memories/m3.jpg", "Memory 3"),
    CarouselItem::new("/images/memories/m4.jpg", "Memory 4"),
    CarouselItem::new("/images/memories/m5.jpg", "Memory 5"),
    CarouselItem::new("/images/memories/m6.jpg", "Memory 6"),
    CarouselItem::new("/images/memories/m7.jpg", "Memory 7"),
    CarouselItem::new("/images/memories/m8.jpg", "Memory 8"),
    CarouselItem::new("/images/memories/m9.jpg", "Memory 9"),
    CarouselItem::new("/images/memories/m10.jpg", "Memory 10"),
];

/// Images of the "Personal" carousel
pub const PERSONAL_ITEMS: [CarouselItem<'static>; 10] = [
    CarouselItem::new("/images/personal/av1.jpg", "Av #1"),
    CarouselItem::new("/images/personal/av2.jpg", "Av #2"),
    CarouselItem::new("/images/personal/av3.jpg", "Av #3"),
    CarouselItem::new("/images/personal/av4.jpg", "Av #4"),
    CarouselItem::new("/images/personal/av5.jpg", "Av #5"),
    CarouselItem::new("/images/personal/av6.jpg", "Av #6"),
    CarouselItem::new("/images/personal/av7.jpg", "Av #7"),
    CarouselItem::new("/images/personal/av8.jpg", "Av #8"),
    CarouselItem::new("/images/personal/av9.jpg", "Av #9"),
    CarouselItem::new("/images/personal/av10.jpg", "Av #10"),
];

/// Green carousel scrolling left.
pub fn memories() -> CarouselConfig<'static> {
    CarouselConfig::new(&MEMORIES_ITEMS)
        .direction(Direction::Left)
        .theme(Theme::Green)
        .titled("Memories", "Beautiful moments to cherish")
        .emoji("🌸", "🌿")
}

/// Pink carousel scrolling right.
pub fn personal() -> CarouselConfig<'static> {
    CarouselConfig::new(&PERSONAL_ITEMS)
        .direction(Direction::Right)
        .theme(Theme::Pink)
        .titled("Miss Av", "Diary Friend")
        .emoji("💖", "💖")
}

/// Named carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselId {
    /// See [`memories`]
    Memories,
    /// See [`personal`]
    Personal,
}

impl CarouselId {
    /// Every instance, in page order
    pub const ALL: [Self; 2] = [Self::Memories, Self::Personal];

    /// Configuration of this instance
    pub fn config(self) -> CarouselConfig<'static> {
        match self {
            Self::Memories => memories(),
            Self::Personal => personal(),
        }
    }

    /// Lowercase name, as used on the command line and in file names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memories => "memories",
            Self::Personal => "personal",
        }
    }
}

impl core::fmt::Display for CarouselId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
