use crate::card::Card;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};

use super::{MAX_HANDS, RoundState, Table};

impl Table {
    /// Re-validates that the active hand can take an action right now.
    ///
    /// Stale UI state is never trusted; every action starts here.
    fn ensure_player_turn(&self) -> Result<usize, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let index = self.active_hand;
        if index >= self.hands.len() {
            return Err(ActionError::HandOutOfRange);
        }
        if self.hands[index].status() != HandStatus::Active {
            return Err(ActionError::HandNotActive);
        }

        Ok(index)
    }

    /// Moves the turn past the current hand, skipping any hand that already
    /// stood or busted. Past the last hand, the dealer takes over.
    fn advance_hand(&mut self) {
        self.active_hand += 1;
        while self.active_hand < self.hands.len()
            && self.hands[self.active_hand].status() != HandStatus::Active
        {
            self.active_hand += 1;
        }

        if self.active_hand >= self.hands.len() {
            self.state = RoundState::DealerTurn;
        }
    }

    /// Player action: hit (draw one card into the active hand).
    ///
    /// A bust ends the hand's turn as if the player had stood.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the shoe is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;

        let card = self.deal_to_player(index)?;
        if self.hands[index].status() == HandStatus::Bust {
            self.advance_hand();
        }

        Ok(card)
    }

    /// Player action: stand (keep the active hand and pass the turn).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_player_turn()?;

        self.hands[index].set_status(HandStatus::Stand);
        self.advance_hand();
        Ok(())
    }

    /// Player action: double down (double the stake, draw one card, stand).
    ///
    /// Legal only on a two-card hand with a bankroll covering the stake
    /// again.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand has more
    /// than two cards, funds are short, or the shoe is empty.
    pub fn double_down(&mut self) -> Result<Card, ActionError> {
        let index = self.ensure_player_turn()?;

        if self.hands[index].len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        let bet = self.hands[index].bet();
        self.ledger
            .place(bet)
            .map_err(|_| ActionError::InsufficientFunds)?;
        self.emit_money();

        self.hands[index].double_bet();
        let card = self.deal_to_player(index)?;

        if self.hands[index].status() == HandStatus::Active {
            self.hands[index].set_status(HandStatus::Stand);
        }
        self.advance_hand();

        Ok(card)
    }

    /// Player action: split a two-card pair into two hands.
    ///
    /// The second card seeds a new hand appended to the end of the hand
    /// list, one more bet unit is committed, and each of the two hands draws
    /// one card. The turn stays on the current hand unless it now shows a
    /// two-card 21, which auto-stands as a plain 21 (a split hand is never a
    /// natural).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand is not a
    /// pair, four hands are already in play, funds are short, or the shoe is
    /// empty.
    pub fn split(&mut self) -> Result<(), ActionError> {
        let index = self.ensure_player_turn()?;

        if self.hands.len() >= MAX_HANDS {
            return Err(ActionError::MaxHandsReached);
        }
        if !self.hands[index].is_pair() {
            return Err(ActionError::CannotSplit);
        }

        let bet = self.hands[index].bet();
        self.ledger
            .place(bet)
            .map_err(|_| ActionError::InsufficientFunds)?;
        self.emit_money();

        // is_pair() guarantees two cards, so the take cannot fail.
        let Some(moved) = self.hands[index].take_split_card() else {
            return Err(ActionError::CannotSplit);
        };
        self.hands.push(Hand::from_split(moved, bet));
        let new_index = self.hands.len() - 1;

        self.deal_to_player(index)?;
        self.deal_to_player(new_index)?;

        if self.hands[index].value() == 21 {
            self.hands[index].set_status(HandStatus::Stand);
            self.advance_hand();
        }

        Ok(())
    }

    /// Whether the active hand may hit right now.
    #[must_use]
    pub fn can_hit(&self) -> bool {
        self.ensure_player_turn().is_ok()
    }

    /// Whether the active hand may double down right now.
    #[must_use]
    pub fn can_double(&self) -> bool {
        self.ensure_player_turn().is_ok_and(|index| {
            self.hands[index].len() == 2 && self.ledger.bankroll() >= self.hands[index].bet()
        })
    }

    /// Whether the active hand may split right now.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.ensure_player_turn().is_ok_and(|index| {
            self.hands.len() < MAX_HANDS
                && self.hands[index].is_pair()
                && self.ledger.bankroll() >= self.hands[index].bet()
        })
    }
}
