//! Table configuration.
//!
//! The ruleset itself is fixed: blackjack pays 3:2 rounded down, the dealer
//! stands on every 17 (hard or soft), at most four hands per seat, and the
//! shoe reshuffles once fewer than a quarter of its cards remain. Only the
//! shoe size and the starting bankroll are configurable.

use crate::error::ConfigError;

/// Smallest starting bankroll the table accepts.
pub const MIN_BANKROLL: usize = 100;

/// Configuration options for a table session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use solojack::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_starting_bankroll(500);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Bankroll the session starts with.
    pub starting_bankroll: usize,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            starting_bankroll: 1000,
        }
    }
}

impl TableOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use solojack::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDecks`] if the deck count is zero and
    /// [`ConfigError::BankrollTooSmall`] if the bankroll is under
    /// [`MIN_BANKROLL`].
    ///
    /// ```
    /// use solojack::{ConfigError, TableOptions};
    ///
    /// let options = TableOptions::default().with_starting_bankroll(50);
    /// assert_eq!(options.validate(), Err(ConfigError::BankrollTooSmall));
    /// ```
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.decks == 0 {
            return Err(ConfigError::NoDecks);
        }
        if self.starting_bankroll < MIN_BANKROLL {
            return Err(ConfigError::BankrollTooSmall);
        }
        Ok(())
    }
}
