//! Round state machine states.

/// Where the table is in the round lifecycle.
///
/// Dealing and settlement are synchronous transients inside
/// [`Table::deal`](crate::Table::deal) and
/// [`Table::settle`](crate::Table::settle); these are the states observable
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round and no bet on the table.
    Idle,
    /// A bet is on the table; cards have not been dealt.
    Betting,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Dealer reveals the hole card and plays out their hand.
    DealerTurn,
    /// Dealer is done; the round can be settled.
    RoundOver,
}
