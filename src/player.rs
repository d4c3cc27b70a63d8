//! Players: a hand of cards and a chip balance.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::mem;

use tracing::debug;

use crate::card::Card;
use crate::error::{BetError, PlayerError};

/// Chips given by [`Player::with_default_chips`].
pub const DEFAULT_CHIPS: usize = 100;

/// Amount used by a plain raise.
pub const DEFAULT_RAISE: usize = 1;

/// A player holding cards and chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    chips: usize,
}

impl Player {
    /// Creates a player with an empty hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NonPositiveChips`] if `chips` is zero.
    pub fn new(name: impl Into<String>, chips: usize) -> Result<Self, PlayerError> {
        if chips == 0 {
            return Err(PlayerError::NonPositiveChips);
        }

        Ok(Self {
            name: name.into(),
            hand: Vec::new(),
            chips,
        })
    }

    /// Creates a player with [`DEFAULT_CHIPS`].
    #[must_use]
    pub fn with_default_chips(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            chips: DEFAULT_CHIPS,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Adds a card to the hand.
    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Returns the cards in the hand, in the order received.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the hand as comma-separated cards, e.g. `♠A, ♥10`.
    ///
    /// An empty hand yields `"<name> has no cards in hand."`.
    #[must_use]
    pub fn hand_summary(&self) -> String {
        if self.hand.is_empty() {
            return format!("{} has no cards in hand.", self.name);
        }

        self.hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Bets `amount` chips, or the whole balance when `all_in` is set.
    ///
    /// Returns the amount deducted.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientChips`] if `amount` exceeds the
    /// balance. The balance is unchanged on error.
    pub fn bet(&mut self, amount: usize, all_in: bool) -> Result<usize, BetError> {
        let amount = if all_in { self.chips } else { amount };

        if amount > self.chips {
            return Err(BetError::InsufficientChips {
                requested: amount,
                available: self.chips,
            });
        }

        self.chips -= amount;
        debug!(player = %self.name, amount, chips = self.chips, "bet placed");
        Ok(amount)
    }

    /// Matches a previous bet.
    ///
    /// # Errors
    ///
    /// See [`Player::bet`].
    pub fn call(&mut self, previous_bet: usize) -> Result<usize, BetError> {
        self.bet(previous_bet, false)
    }

    /// Raises by `amount` ([`DEFAULT_RAISE`] for a minimal raise).
    ///
    /// # Errors
    ///
    /// See [`Player::bet`].
    pub fn raise_bet(&mut self, amount: usize, all_in: bool) -> Result<usize, BetError> {
        self.bet(amount, all_in)
    }

    /// Credits winnings to the balance.
    pub const fn win(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Gives up the hand, returning the cards it held.
    pub fn fold(&mut self) -> Vec<Card> {
        debug!(player = %self.name, cards = self.hand.len(), "hand folded");
        mem::take(&mut self.hand)
    }
}
