//! Cards and deck constants.
//!
//! Ranks are bare numbers: 1 is the ace, 2 through 10 read literally, and
//! 11/12/13 are jack, queen, king. Blackjack values (faces as ten, aces as
//! one or eleven) are the hand module's business, not the card's.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Every suit once, in the order the shoe builder walks them.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// A playing card: a suit and a numeric rank. `Copy`, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit.
    pub suit: Suit,
    /// The rank, 1 (ace) through 13 (king).
    pub rank: u8,
}

impl Card {
    /// Creates a card.
    ///
    /// The rank is taken as-is; ranks outside 1..=13 evaluate as zero when
    /// a hand is scored.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Whether this card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

/// Cards in a single standard deck.
pub const DECK_SIZE: usize = 52;
