//! Error types for deck and player operations.

use thiserror::Error;

use crate::card::{Face, Suite};

/// Errors that can occur while parsing suites, ranks and variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not one of spade, heart, diamond or club.
    #[error("suite should be one of spade, heart, diamond, club")]
    InvalidSuite,
    /// Not one of A, 2-10, J, Q or K.
    #[error("rank should be one of A, 2, 3, 4, 5, 6, 7, 8, 9, 10, J, Q, K")]
    InvalidRank,
    /// Unknown game variant name.
    #[error("unknown game variant")]
    InvalidVariant,
}

/// Errors that can occur while populating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CreateError {
    /// The deck already holds cards.
    #[error("deck is already populated")]
    AlreadyPopulated,
    /// The configured suites and faces produce the same card twice.
    #[error("duplicate card {face} of {suite}")]
    DuplicateCard {
        /// Suite of the repeated card.
        suite: Suite,
        /// Face of the repeated card.
        face: Face,
    },
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while cutting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// The cut position lies outside `0..=len`.
    #[error("cut position {position} is outside 0..={len}")]
    OutOfRange {
        /// Requested position.
        position: usize,
        /// Number of cards in the deck.
        len: usize,
    },
}

/// Errors that can occur when creating or seating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// Starting chips must be greater than zero.
    #[error("chips must be a positive non-zero integer")]
    NonPositiveChips,
    /// Every seat id is taken.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet exceeds the player's balance.
    #[error("not enough chips to bet {requested} (have {available})")]
    InsufficientChips {
        /// Amount asked for.
        requested: usize,
        /// Balance at the time of the bet.
        available: usize,
    },
}

/// Errors that can occur during table operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// No player is seated under this id.
    #[error("player not found")]
    PlayerNotFound,
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
}
