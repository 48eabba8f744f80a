//! Multi-deck card supply.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::{ConfigError, EmptyShoeError};

/// A multi-deck shoe.
///
/// The shoe owns its card supply and a seedable RNG. Cards are drawn from the
/// tail. The length only decreases during a round and returns to full
/// capacity only through [`Shoe::rebuild`]; the shoe never reshuffles on its
/// own, the engine triggers it between draws so shuffle timing stays
/// auditable.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Builds a shoe of `decks` decks and gives it an initial shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if `decks` is zero.
    pub fn new(decks: u8, seed: u64) -> Result<Self, ConfigError> {
        if decks == 0 {
            return Err(ConfigError::NoDecks);
        }

        let mut shoe = Self {
            cards: Vec::new(),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.rebuild();
        Ok(shoe)
    }

    /// Restores the shoe to full capacity and shuffles it.
    pub fn rebuild(&mut self) {
        self.cards.clear();
        self.cards.reserve(self.capacity());

        for _ in 0..self.decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    self.cards.push(Card::new(suit, rank));
                }
            }
        }

        self.shuffle();
    }

    /// Applies a uniformly random permutation to the remaining cards.
    ///
    /// `rand`'s slice shuffle is a Fisher-Yates, so every permutation is
    /// equally likely.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the card at the draw end.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyShoeError`] if no cards remain. The engine's reshuffle
    /// policy keeps this unreachable in practice.
    pub fn draw(&mut self) -> Result<Card, EmptyShoeError> {
        self.cards.pop().ok_or(EmptyShoeError)
    }

    /// Returns the remaining cards, draw end last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks the shoe was built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Total capacity of the shoe: decks x 52.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Remaining cards as a fraction of capacity, in `[0, 1]`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn remaining_fraction(&self) -> f64 {
        self.cards.len() as f64 / self.capacity() as f64
    }

    /// Returns whether the shoe is due for a reshuffle.
    ///
    /// True when a round is in progress and fewer than a quarter of the
    /// shoe's capacity remains. The caller decides when to act on this; the
    /// shoe itself never discards or re-adds cards.
    #[must_use]
    pub fn needs_reshuffle(&self, round_in_progress: bool) -> bool {
        round_in_progress && self.cards.len() * 4 < self.capacity()
    }

    /// Replaces the remaining cards, draw end last.
    ///
    /// Intended for scripted deals and tests; normal play never calls this.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
