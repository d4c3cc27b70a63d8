//! Playing-card decks, game point tables and players, with optional `no_std`
//! support.
//!
//! A [`Deck`] is populated from [`DeckOptions`], which choose the suites,
//! faces and the [`GameVariant`] point table. Decks can be shuffled, riffled,
//! cut and dealt from. A [`Player`] holds a hand and a chip balance, and a
//! [`Table`] shares one deck between several players behind locks.
//!
//! # Example
//!
//! ```
//! use cardtable::{Deck, DeckOptions, Player, Points};
//!
//! let mut deck = Deck::new(42);
//! deck.create(&DeckOptions::default()).unwrap();
//! deck.cut(Some(10)).unwrap();
//!
//! let mut player = Player::new("alice", 100).unwrap();
//! player.receive_card(deck.deal(true).unwrap());
//! assert_eq!(player.hand().len(), 1);
//! assert!(matches!(player.hand()[0].points(), Points::Fixed(_) | Points::Either(..)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod player;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Face, Points, Rank, Suite};
pub use deck::{DEFAULT_CUT_RANGE, Deck};
pub use error::{BetError, CreateError, CutError, DealError, ParseError, PlayerError, TableError};
pub use options::{DeckOptions, GameVariant};
pub use player::{DEFAULT_CHIPS, DEFAULT_RAISE, Player};
pub use table::Table;
