use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{RoundState, Table};

impl Table {
    /// Adds `amount` to the current bet.
    ///
    /// Bets accumulate chip by chip; the total moves from the bankroll into
    /// the committed bet and becomes the stake of the first hand when the
    /// cards go out.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, a round is in progress, or the
    /// bankroll cannot cover it.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.round_in_progress() {
            return Err(BetError::RoundInProgress);
        }

        self.ledger.place(amount)?;
        self.state = RoundState::Betting;
        self.emit_money();
        Ok(())
    }

    /// Returns the whole current bet to the bankroll.
    ///
    /// Returns the amount cleared (zero is fine when nothing was staged).
    ///
    /// # Errors
    ///
    /// Returns [`BetError::RoundInProgress`] once cards are on the table.
    pub fn clear_bet(&mut self) -> Result<usize, BetError> {
        if self.round_in_progress() {
            return Err(BetError::RoundInProgress);
        }

        let returned = self.ledger.clear();
        self.state = RoundState::Idle;
        self.emit_money();
        Ok(returned)
    }

    /// Deals the initial cards and opens the player turn.
    ///
    /// Deal order is fixed: player up, dealer up, player up, dealer hole.
    /// The first three are counted as they land; the hole card stays out of
    /// the count until the dealer reveals it. The penetration check runs
    /// after every draw. If the first hand is a natural the player turn is
    /// skipped entirely and the table goes straight to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet is staged, the table is mid-round, or the
    /// shoe runs dry (unreachable under the reshuffle policy).
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Betting {
            return Err(DealError::InvalidState);
        }

        let bet = self.ledger.current_bet();
        if bet == 0 {
            return Err(DealError::NoBet);
        }

        // Last round's cards stay on the table until the next deal.
        self.hands.clear();
        self.dealer_hand.clear();
        self.active_hand = 0;
        self.hands.push(Hand::new(bet));
        self.state = RoundState::PlayerTurn;

        self.deal_to_player(0)?;
        self.deal_to_dealer(true)?;
        self.deal_to_player(0)?;
        self.deal_to_dealer(false)?;

        // A natural stands immediately; the dealer still plays out.
        if self.hands[0].is_natural() {
            self.state = RoundState::DealerTurn;
        }

        Ok(())
    }
}
