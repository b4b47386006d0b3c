//! Record of items whose image failed to load.
//!
//! Once an item's image fails it shows the placeholder for the rest of the
//! carousel's life; it is never retried. The record is a fixed 64-bit set
//! indexed by item position, which is why a carousel holds at most
//! [`MAX_ITEMS`] items.

/// Maximum number of items a carousel accepts.
pub const MAX_ITEMS: usize = 64;

/// Set of item indices currently shown as placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FallbackSet(u64);

impl FallbackSet {
    /// Empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Record a failure for `item_index`.
    ///
    /// Returns `true` when the index was not recorded before. Indices at or
    /// above [`MAX_ITEMS`] are ignored.
    pub fn insert(&mut self, item_index: usize) -> bool {
        let Some(bit) = Self::bit(item_index) else {
            return false;
        };
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Whether `item_index` has failed.
    pub fn contains(&self, item_index: usize) -> bool {
        Self::bit(item_index).is_some_and(|bit| self.0 & bit != 0)
    }

    /// Number of failed items
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no item has failed
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn bit(item_index: usize) -> Option<u64> {
        let shift = u32::try_from(item_index).ok()?;
        1u64.checked_shl(shift)
    }
}
