use alloc::vec::Vec;

use crate::card::Card;
use crate::error::SettleError;
use crate::event::{HandOwner, TableEvent};
use crate::result::{HandOutcome, HandResult, RoundResult};

use super::{RoundState, Table};

impl Table {
    /// Dealer reveals the hole card and plays out their hand.
    ///
    /// The hole card joins the running count the moment it is revealed,
    /// exactly once. The dealer then draws while under 17 and stands on any
    /// 17 or higher, hard or soft. Every draw is counted and re-checks the
    /// penetration threshold.
    ///
    /// Returns the cards the dealer drew.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the shoe runs dry
    /// (unreachable under the reshuffle policy).
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, SettleError> {
        if self.state != RoundState::DealerTurn {
            return Err(SettleError::InvalidState);
        }

        if !self.dealer_hand.is_hole_revealed() {
            self.dealer_hand.reveal_hole();
            if let Some(&hole) = self.dealer_hand.hole_card() {
                self.count_visible(hole);
            }
            let value = self.dealer_hand.value();
            self.push_event(TableEvent::HandValueChanged {
                owner: HandOwner::Dealer,
                value,
            });
        }

        let mut drawn = Vec::new();
        while self.dealer_hand.value() < 17 {
            drawn.push(self.deal_to_dealer(true)?);
        }

        self.state = RoundState::RoundOver;
        Ok(drawn)
    }

    /// Settles every hand against the dealer and credits the payout.
    ///
    /// Payouts are stake-inclusive: a plain win returns twice the bet, a
    /// push returns the bet, a winning natural returns the bet plus three
    /// halves of it rounded down, and losses return nothing. The summed
    /// payout lands in the bankroll, the bet clears, and the table goes back
    /// to idle.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::InvalidState`] unless the dealer has finished.
    pub fn settle(&mut self) -> Result<RoundResult, SettleError> {
        if self.state != RoundState::RoundOver {
            return Err(SettleError::InvalidState);
        }

        let dealer_value = self.dealer_hand.value();
        let dealer_bust = dealer_value > 21;

        let mut hands = Vec::with_capacity(self.hands.len());
        let mut total_payout: usize = 0;

        for (hand_index, hand) in self.hands.iter().enumerate() {
            let bet = hand.bet();
            let player_value = hand.value();

            let (mut outcome, mut payout) = if player_value > 21 {
                (HandOutcome::Bust, 0)
            } else if dealer_bust {
                (HandOutcome::DealerBust, bet * 2)
            } else if player_value > dealer_value {
                (HandOutcome::Win, bet * 2)
            } else if player_value < dealer_value {
                (HandOutcome::Lose, 0)
            } else {
                (HandOutcome::Push, bet)
            };

            // A winning natural pays 3:2, rounded down.
            if hand.is_natural()
                && matches!(outcome, HandOutcome::Win | HandOutcome::DealerBust)
            {
                outcome = HandOutcome::Blackjack;
                payout = bet + bet * 3 / 2;
            }

            total_payout += payout;
            hands.push(HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_value,
                dealer_value,
            });
        }

        self.ledger.settle(total_payout);
        self.state = RoundState::Idle;

        let result = RoundResult {
            hands,
            total_payout,
            dealer_value,
            dealer_bust,
        };
        self.push_event(TableEvent::RoundSettled(result.clone()));
        self.emit_money();

        Ok(result)
    }
}
