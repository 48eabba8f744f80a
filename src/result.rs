//! Round settlement results.

use alloc::vec::Vec;
use core::fmt;

/// Outcome of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player beat the dealer's total.
    Win,
    /// Dealer busted while the player stood.
    DealerBust,
    /// Dealer's total was higher.
    Lose,
    /// Player busted.
    Bust,
    /// Totals were equal; stake returned.
    Push,
    /// Winning natural, paid 3:2.
    Blackjack,
}

impl fmt::Display for HandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Win => "Win",
            Self::DealerBust => "Dealer Bust - Win",
            Self::Lose => "Lose",
            Self::Bust => "Bust",
            Self::Push => "Push",
            Self::Blackjack => "Blackjack!",
        })
    }
}

/// Settlement of a single hand.
///
/// `payout` is the total credited back to the bankroll, stake included: a
/// plain win credits twice the bet, a push credits the bet, a winning natural
/// credits the bet plus three halves of it rounded down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// The hand index (0 unless the player split).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake this hand carried.
    pub bet: usize,
    /// Total credited for this hand.
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
}

/// Settlement of the whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Per-hand results, in hand order.
    pub hands: Vec<HandResult>,
    /// Sum of the per-hand payouts credited to the bankroll.
    pub total_payout: usize,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
