//! Hi-Lo running count.

use crate::card::Card;

/// A Hi-Lo card counter.
///
/// Low cards (2-6) add one, tens and aces subtract one, 7-9 are neutral.
/// The tracker must see each card exactly once, at the moment it becomes
/// visible: face-up deals right away, the dealer hole card at reveal time,
/// face-down cards never.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountTracker {
    running_count: i32,
}

impl CountTracker {
    /// Creates a tracker with a zero count.
    #[must_use]
    pub const fn new() -> Self {
        Self { running_count: 0 }
    }

    /// Hi-Lo tag for a rank.
    const fn tag(rank: u8) -> i32 {
        match rank {
            2..=6 => 1,
            1 | 10..=13 => -1,
            _ => 0,
        }
    }

    /// Records a card that just became visible.
    pub const fn observe(&mut self, card: Card) {
        self.running_count += Self::tag(card.rank);
    }

    /// Resets the count to zero. Invoked whenever the shoe reshuffles.
    pub const fn reset(&mut self) {
        self.running_count = 0;
    }

    /// Returns the current running count.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.running_count
    }
}
