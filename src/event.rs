//! Outbound notifications for the presentation adapter.
//!
//! The engine is synchronous; it queues an event for every observable state
//! change and the adapter drains the queue with
//! [`Table::drain_events`](crate::Table::drain_events), pacing animation or
//! rendering however it likes. Draining never changes game state.

use crate::card::Card;
use crate::result::RoundResult;

/// Which seat a card or value update belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOwner {
    /// One of the player's hands (index 0 unless the player split).
    Player(usize),
    /// The dealer's hand.
    Dealer,
}

/// A state-change notification emitted by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// A card landed in a hand. Face-down cards carry their identity here;
    /// whether to render the back is the adapter's call.
    CardDealt {
        /// The hand the card landed in.
        owner: HandOwner,
        /// The card itself.
        card: Card,
        /// Whether the card is visible (and therefore already counted).
        face_up: bool,
    },
    /// A hand's visible value changed.
    HandValueChanged {
        /// The hand whose value changed.
        owner: HandOwner,
        /// The new visible value.
        value: u8,
    },
    /// The shoe was rebuilt and reshuffled; the running count is back to 0.
    ShuffleOccurred,
    /// The round settled.
    RoundSettled(RoundResult),
    /// The bankroll changed.
    BankrollChanged(usize),
    /// The current bet changed.
    BetChanged(usize),
    /// The Hi-Lo running count changed.
    CountChanged(i32),
}
