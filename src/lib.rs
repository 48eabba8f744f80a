//! A single-seat blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that manages the full round flow:
//! betting, the initial deal, player actions (hit, stand, double down,
//! split), dealer play, and settlement. The table also keeps a Hi-Lo
//! running count via [`CountTracker`], updated the moment each card becomes
//! visible.
//!
//! Rendering and pacing live outside the crate: a presentation adapter
//! submits intents and drains [`TableEvent`]s, so every transition here is a
//! synchronous, deterministic step.
//!
//! # Example
//!
//! ```no_run
//! use solojack::{Table, TableOptions};
//!
//! let options = TableOptions::default().with_decks(6);
//! let mut table = Table::new(options, 42).unwrap();
//! table.place_bet(25).unwrap();
//! table.deal().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod count;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use count::CountTracker;
pub use error::{ActionError, BetError, ConfigError, DealError, EmptyShoeError, SettleError};
pub use event::{HandOwner, TableEvent};
pub use game::{MAX_HANDS, RoundState, Table};
pub use hand::{DealerHand, Hand, HandStatus};
pub use ledger::BettingLedger;
pub use options::{MIN_BANKROLL, TableOptions};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use shoe::Shoe;
