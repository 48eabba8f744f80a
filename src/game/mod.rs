//! Round engine and session state.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::count::CountTracker;
use crate::error::{ActionError, ConfigError, EmptyShoeError};
use crate::event::{HandOwner, TableEvent};
use crate::hand::{DealerHand, Hand};
use crate::ledger::BettingLedger;
use crate::options::TableOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Maximum number of hands a seat can hold through splitting.
pub const MAX_HANDS: usize = 4;

/// A single-seat blackjack table.
///
/// The table owns the shoe, the Hi-Lo count, the betting ledger, and the
/// round state machine. Everything runs synchronously on one logical thread;
/// a presentation adapter submits intents (bets and actions) and drains
/// [`TableEvent`]s to render from.
#[derive(Debug)]
pub struct Table {
    options: TableOptions,
    shoe: Shoe,
    count: CountTracker,
    ledger: BettingLedger,
    hands: Vec<Hand>,
    dealer_hand: DealerHand,
    active_hand: usize,
    state: RoundState,
    events: VecDeque<TableEvent>,
}

impl Table {
    /// Creates a table from validated options and a shuffle seed.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the bankroll is under the table minimum
    /// or the deck count is zero.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use solojack::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42).unwrap();
    /// let _ = table;
    /// ```
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::new(options.decks, seed)?;

        Ok(Self {
            options,
            shoe,
            count: CountTracker::new(),
            ledger: BettingLedger::new(options.starting_bankroll),
            hands: Vec::new(),
            dealer_hand: DealerHand::new(),
            active_hand: 0,
            state: RoundState::Idle,
            events: VecDeque::new(),
        })
    }

    /// Discards the session and starts over with fresh options.
    ///
    /// Rebuilds the shoe, resets the count and bankroll, and returns the
    /// table to [`RoundState::Idle`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the new options are invalid; the current
    /// session is left running in that case.
    pub fn new_game(&mut self, options: TableOptions, seed: u64) -> Result<(), ConfigError> {
        *self = Self::new(options, seed)?;
        Ok(())
    }

    /// Clears the table for the next round outside of a live round.
    ///
    /// Previous hands stay visible after settlement until either this or the
    /// next [`Table::deal`] clears them.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidState`] while a round is in progress.
    pub fn new_round(&mut self) -> Result<(), ActionError> {
        if self.round_in_progress() {
            return Err(ActionError::InvalidState);
        }

        self.hands.clear();
        self.dealer_hand.clear();
        self.active_hand = 0;
        Ok(())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the options the session was configured with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.ledger.bankroll()
    }

    /// Returns the stake committed to the current round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.ledger.current_bet()
    }

    /// Returns the Hi-Lo running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.count.value()
    }

    /// Returns the player's hands, in play order.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer_hand
    }

    /// Index of the hand currently waiting on a player action.
    #[must_use]
    pub const fn active_hand(&self) -> usize {
        self.active_hand
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Remaining shoe as a fraction of capacity, in `[0, 1]`.
    #[must_use]
    pub fn remaining_fraction(&self) -> f64 {
        self.shoe.remaining_fraction()
    }

    /// Removes and returns all queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<TableEvent> {
        self.events.drain(..).collect()
    }

    /// Replaces the shoe contents, draw end last.
    ///
    /// Intended for scripted deals and tests; normal play never calls this.
    pub fn load_shoe(&mut self, cards: Vec<Card>) {
        self.shoe.replace(cards);
    }

    pub(super) const fn round_in_progress(&self) -> bool {
        matches!(
            self.state,
            RoundState::PlayerTurn | RoundState::DealerTurn | RoundState::RoundOver
        )
    }

    pub(super) fn push_event(&mut self, event: TableEvent) {
        self.events.push_back(event);
    }

    /// Draws one card, logging the should-be-unreachable empty-shoe case.
    fn draw_card(&mut self) -> Result<Card, EmptyShoeError> {
        self.shoe.draw().inspect_err(|_| {
            log::error!("shoe ran dry mid-round; reshuffle threshold check failed");
        })
    }

    /// Records a card that just became visible and reports the new count.
    pub(super) fn count_visible(&mut self, card: Card) {
        self.count.observe(card);
        self.push_event(TableEvent::CountChanged(self.count.value()));
    }

    /// Rebuilds the shoe once penetration trips.
    ///
    /// Checked after every draw, so the rebuild always lands between draws
    /// and never touches cards already dealt.
    pub(super) fn maybe_reshuffle(&mut self) {
        if !self.shoe.needs_reshuffle(self.round_in_progress()) {
            return;
        }

        self.shoe.rebuild();
        self.count.reset();
        log::info!("shoe reshuffled, running count reset");
        self.push_event(TableEvent::ShuffleOccurred);
        self.push_event(TableEvent::CountChanged(0));
    }

    /// Deals one face-up card to the player hand at `index`.
    ///
    /// The card is applied in full (shoe, hand, count, events) before the
    /// penetration check runs.
    pub(super) fn deal_to_player(&mut self, index: usize) -> Result<Card, EmptyShoeError> {
        let card = self.draw_card()?;
        self.hands[index].add_card(card);
        self.push_event(TableEvent::CardDealt {
            owner: HandOwner::Player(index),
            card,
            face_up: true,
        });
        self.count_visible(card);

        let value = self.hands[index].value();
        self.push_event(TableEvent::HandValueChanged {
            owner: HandOwner::Player(index),
            value,
        });

        self.maybe_reshuffle();
        Ok(card)
    }

    /// Deals one card to the dealer; only face-up cards are counted.
    pub(super) fn deal_to_dealer(&mut self, face_up: bool) -> Result<Card, EmptyShoeError> {
        let card = self.draw_card()?;
        self.dealer_hand.add_card(card);
        self.push_event(TableEvent::CardDealt {
            owner: HandOwner::Dealer,
            card,
            face_up,
        });
        if face_up {
            self.count_visible(card);
        }

        let value = self.dealer_hand.visible_value();
        self.push_event(TableEvent::HandValueChanged {
            owner: HandOwner::Dealer,
            value,
        });

        self.maybe_reshuffle();
        Ok(card)
    }

    /// Reports the ledger after any bet or bankroll movement.
    pub(super) fn emit_money(&mut self) {
        self.push_event(TableEvent::BankrollChanged(self.ledger.bankroll()));
        self.push_event(TableEvent::BetChanged(self.ledger.current_bet()));
    }
}
