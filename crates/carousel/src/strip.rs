//! Windowing: the tripled strip that makes a finite list loop forever.
//!
//! The strip is `items ++ items ++ items`. The viewport is anchored on the
//! middle repetition, so any offset within one cycle in either direction
//! (`|offset| <= items.len() * stride`) still has a full set of tiles on both
//! sides of the viewport.

use crate::item::CarouselItem;

/// Number of back-to-back copies of the item list in the strip.
pub const REPETITIONS: usize = 3;

/// Identity of one slot in the strip.
///
/// Two copies of the same image never share a key because the absolute
/// position is part of it. Displays as `"{src}-{position}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey<'a> {
    /// Image locator of the slot's item
    pub src: &'a str,
    /// Absolute position in the strip
    pub position: usize,
}

impl core::fmt::Display for SlotKey<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.src, self.position)
    }
}

/// One rendered tile of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripSlot<'a> {
    /// Absolute position, `0..REPETITIONS * len`
    pub position: usize,
    /// Which copy of the list this slot belongs to, `0..REPETITIONS`
    pub repetition: usize,
    /// Index into the caller's item list
    pub item_index: usize,
    /// The item itself
    pub item: CarouselItem<'a>,
}

impl<'a> StripSlot<'a> {
    /// Unique key of this slot
    pub fn key(&self) -> SlotKey<'a> {
        SlotKey {
            src: self.item.src,
            position: self.position,
        }
    }
}

/// Iterator over every slot of the tripled strip, left to right.
#[derive(Debug, Clone)]
pub struct Strip<'a> {
    items: &'a [CarouselItem<'a>],
    position: usize,
}

impl<'a> Strip<'a> {
    /// Strip over `items`
    pub fn new(items: &'a [CarouselItem<'a>]) -> Self {
        Self { items, position: 0 }
    }

    /// Total slot count, `REPETITIONS * items.len()`
    pub fn slot_count(&self) -> usize {
        self.items.len().saturating_mul(REPETITIONS)
    }
}

impl<'a> Iterator for Strip<'a> {
    type Item = StripSlot<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.items.len();
        if self.position >= self.slot_count() {
            return None;
        }
        let item_index = self.position.checked_rem(len)?;
        let repetition = self.position.checked_div(len)?;
        let item = *self.items.get(item_index)?;
        let slot = StripSlot {
            position: self.position,
            repetition,
            item_index,
            item,
        };
        self.position = self.position.saturating_add(1);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.slot_count().saturating_sub(self.position);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Strip<'_> {}

/// X coordinate of a slot's left edge relative to the viewport.
///
/// `offset` is the rendered strip offset. Slot `len` (the first tile of the
/// middle repetition) sits at `offset`.
pub fn slot_x(position: usize, len: usize, stride: u32, offset: i32) -> i32 {
    let position = i64::try_from(position).unwrap_or(i64::MAX);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let x = position
        .saturating_sub(len)
        .saturating_mul(i64::from(stride))
        .saturating_add(i64::from(offset));
    saturate_i32(x)
}

/// Shift `offset` by whole cycles into `[-cycle / 2, cycle / 2)`.
///
/// The strip repeats every `len * stride` pixels, so the result draws the
/// same picture while keeping the tripled strip centred on the viewport.
pub fn wrap_into_cycle(offset: i32, len: usize, stride: u32) -> i32 {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let cycle = len.saturating_mul(i64::from(stride));
    if cycle == 0 {
        return offset;
    }
    let half = cycle / 2;
    let wrapped = i64::from(offset)
        .saturating_add(half)
        .rem_euclid(cycle)
        .saturating_sub(half);
    saturate_i32(wrapped)
}

/// Clamp an `i64` into `i32` range.
pub(crate) fn saturate_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(if v < 0 { i32::MIN } else { i32::MAX })
}
