//! Error types for table operations.
//!
//! Every error from a user-initiated call rejects the action and leaves the
//! table state untouched. [`EmptyShoeError`] is the one exception to the
//! "recoverable" rule: the reshuffle policy makes it unreachable, so hitting
//! it means the penetration check is broken and the engine logs it before
//! propagating.

use thiserror::Error;

/// Errors raised while validating session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Starting bankroll is below the table minimum.
    #[error("starting bankroll must be at least 100")]
    BankrollTooSmall,
    /// Shoe must hold at least one deck.
    #[error("deck count must be at least 1")]
    NoDecks,
}

/// Errors that can occur while placing or clearing bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets cannot change once cards are on the table.
    #[error("a round is in progress")]
    RoundInProgress,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when dealing the initial cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid table state for dealing.
    #[error("invalid table state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBet,
    /// No cards remain in the shoe.
    #[error("no cards remain in the shoe")]
    EmptyShoe,
}

impl From<EmptyShoeError> for DealError {
    fn from(_: EmptyShoeError) -> Self {
        Self::EmptyShoe
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid table state for this action.
    #[error("invalid table state for this action")]
    InvalidState,
    /// Active hand index is out of range.
    #[error("hand index out of range")]
    HandOutOfRange,
    /// Hand has already stood, busted, or is a blackjack.
    #[error("hand is not active")]
    HandNotActive,
    /// Doubling down requires exactly two cards.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Splitting requires a two-card pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The table allows at most four hands per seat.
    #[error("maximum number of hands reached")]
    MaxHandsReached,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards remain in the shoe.
    #[error("no cards remain in the shoe")]
    EmptyShoe,
}

impl From<EmptyShoeError> for ActionError {
    fn from(_: EmptyShoeError) -> Self {
        Self::EmptyShoe
    }
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid table state for dealer play or settlement.
    #[error("invalid table state for settlement")]
    InvalidState,
    /// No cards remain in the shoe.
    #[error("no cards remain in the shoe")]
    EmptyShoe,
}

impl From<EmptyShoeError> for SettleError {
    fn from(_: EmptyShoeError) -> Self {
        Self::EmptyShoe
    }
}

/// The shoe has no cards left to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards remain in the shoe")]
pub struct EmptyShoeError;
