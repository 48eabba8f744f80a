//! Bankroll and bet bookkeeping.

use crate::error::BetError;

/// Session bankroll plus the stake committed to the current round.
///
/// `bankroll + current_bet` is conserved by [`BettingLedger::place`] and
/// [`BettingLedger::clear`]. Money leaves the ledger only when a round
/// settles, and comes back through [`BettingLedger::settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingLedger {
    bankroll: usize,
    current_bet: usize,
}

impl BettingLedger {
    /// Creates a ledger with the given starting bankroll and no bet.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            current_bet: 0,
        }
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the stake currently committed to the round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Moves `amount` from the bankroll into the current bet.
    ///
    /// Also used for the extra stakes a double down or split commits.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the
    /// bankroll; the ledger is left unchanged.
    pub const fn place(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.current_bet += amount;
        Ok(())
    }

    /// Returns the whole current bet to the bankroll.
    ///
    /// Returns the amount that was cleared.
    pub const fn clear(&mut self) -> usize {
        let returned = self.current_bet;
        self.bankroll += returned;
        self.current_bet = 0;
        returned
    }

    /// Credits winnings to the bankroll. Always succeeds.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll += amount;
    }

    /// Ends the round: credits the total payout and releases the stake.
    ///
    /// The committed bet does not come back here; whatever the round paid out
    /// already includes any returned stakes.
    pub const fn settle(&mut self, payout: usize) {
        self.bankroll += payout;
        self.current_bet = 0;
    }
}
