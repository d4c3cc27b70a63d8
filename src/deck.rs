//! The deck: population, shuffling, cutting and dealing.

use alloc::vec::Vec;
use core::fmt;
use core::mem;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, trace};

use crate::card::{Card, Face, Rank, Suite};
use crate::error::{CreateError, CutError, DealError};
use crate::options::DeckOptions;

/// Default bounds for a random cut, tuned for a 52-card deck.
pub const DEFAULT_CUT_RANGE: (usize, usize) = (9, 41);

/// Suites carrying the black and red jokers.
const JOKER_SUITES: [Suite; 2] = [Suite::Spade, Suite::Heart];

/// An ordered deck of cards plus the pile of dealt cards.
///
/// The last card of [`Deck::cards`] is the top of the deck and is the next
/// one dealt.
///
/// # Example
///
/// ```
/// use cardtable::{Deck, DeckOptions, DECK_SIZE};
///
/// let mut deck = Deck::new(7);
/// deck.create(&DeckOptions::default()).unwrap().shuffle();
/// let card = deck.deal(true).unwrap();
/// assert_eq!(deck.len(), DECK_SIZE - 1);
/// assert_eq!(deck.pile(), &[card]);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    pile: Vec<Card>,
    cut_range: (usize, usize),
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an empty deck whose shuffles and random cuts derive from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            cards: Vec::new(),
            pile: Vec::new(),
            cut_range: DEFAULT_CUT_RANGE,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Sets the inclusive bounds used by [`Deck::cut`] when no position is given.
    ///
    /// Bounds are clamped to the deck length at cut time.
    #[must_use]
    pub fn with_cut_range(mut self, low: usize, high: usize) -> Self {
        self.cut_range = (low, high);
        self
    }

    /// Populates the deck with one card per configured suite and face.
    ///
    /// Points come from the options' [`GameVariant`](crate::GameVariant).
    /// Jokers, when configured, are appended as a black (spade) and a red
    /// (heart) joker.
    ///
    /// # Errors
    ///
    /// Returns [`CreateError::AlreadyPopulated`] if the deck or its pile holds
    /// cards, and [`CreateError::DuplicateCard`] if the options repeat a suite
    /// or face. The deck is unchanged on error.
    pub fn create(&mut self, options: &DeckOptions) -> Result<&mut Self, CreateError> {
        if !self.cards.is_empty() || !self.pile.is_empty() {
            return Err(CreateError::AlreadyPopulated);
        }

        let joker_count = if options.jokers.is_some() {
            JOKER_SUITES.len()
        } else {
            0
        };
        let mut cards =
            Vec::with_capacity(options.suites.len() * options.faces.len() + joker_count);
        let mut seen = HashSet::with_capacity(cards.capacity());

        for &suite in &options.suites {
            for &face in &options.faces {
                if !seen.insert((suite, face)) {
                    return Err(CreateError::DuplicateCard { suite, face });
                }
                let rank = Rank::new(face, Some(options.variant.points(face)));
                cards.push(Card::new(suite, rank));
            }
        }

        if let Some(points) = options.jokers {
            for suite in JOKER_SUITES {
                if !seen.insert((suite, Face::Joker)) {
                    return Err(CreateError::DuplicateCard {
                        suite,
                        face: Face::Joker,
                    });
                }
                cards.push(Card::new(suite, Rank::new(Face::Joker, Some(points))));
            }
        }

        debug!(variant = %options.variant, cards = cards.len(), "deck populated");
        self.cards = cards;
        Ok(self)
    }

    /// Shuffles the deck uniformly at random.
    pub fn shuffle(&mut self) -> &mut Self {
        self.cards.shuffle(&mut self.rng);
        trace!(cards = self.cards.len(), "deck shuffled");
        self
    }

    /// Splits the deck in two halves and interleaves them card by card.
    ///
    /// A 52-card deck `[c0..c51]` becomes `[c0, c26, c1, c27, .., c25, c51]`.
    /// With an odd number of cards the first half holds the extra card, which
    /// ends up last.
    pub fn riffle_shuffle(&mut self) -> &mut Self {
        let mid = self.cards.len().div_ceil(2);
        let mut second = self.cards.split_off(mid).into_iter();
        let first = mem::take(&mut self.cards);

        let mut merged = Vec::with_capacity(first.len() + second.len());
        for card in first {
            merged.push(card);
            if let Some(other) = second.next() {
                merged.push(other);
            }
        }

        self.cards = merged;
        trace!(cards = self.cards.len(), "deck riffled");
        self
    }

    /// Cuts the deck, moving the cards below `position` to the top.
    ///
    /// Afterwards the deck reads `old[position..]` followed by
    /// `old[..position]`. Without a position, one is drawn uniformly from the
    /// cut range clamped to the deck length. Returns the position used.
    ///
    /// # Errors
    ///
    /// Returns [`CutError::OutOfRange`] if `position` exceeds the number of
    /// cards. The deck is unchanged on error.
    pub fn cut(&mut self, position: Option<usize>) -> Result<usize, CutError> {
        let len = self.cards.len();
        let position = match position {
            Some(position) if position > len => {
                return Err(CutError::OutOfRange { position, len });
            }
            Some(position) => position,
            None => self.random_cut_position(),
        };

        self.cards.rotate_left(position);
        debug!(position, len, "deck cut");
        Ok(position)
    }

    fn random_cut_position(&mut self) -> usize {
        let len = self.cards.len();
        let high = self.cut_range.1.min(len);
        let low = if self.cut_range.0 > high {
            0
        } else {
            self.cut_range.0
        };
        self.rng.random_range(low..=high)
    }

    /// Deals the top card, optionally placing it on the pile as well.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain.
    pub fn deal(&mut self, add_to_pile: bool) -> Result<Card, DealError> {
        let card = self.cards.pop().ok_or(DealError::EmptyDeck)?;
        if add_to_pile {
            self.pile.push(card);
        }
        trace!(%card, remaining = self.cards.len(), "card dealt");
        Ok(card)
    }

    /// Places cards on the pile.
    pub fn discard<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.pile.extend(cards);
    }

    /// Returns the pile to the bottom of the deck, leaving the pile empty.
    ///
    /// Returns the number of cards moved.
    pub fn collect_pile(&mut self) -> usize {
        let mut pile = mem::take(&mut self.pile);
        let moved = pile.len();
        pile.append(&mut self.cards);
        self.cards = pile;
        debug!(moved, cards = self.cards.len(), "pile collected");
        moved
    }

    /// Returns the cards in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the dealt and discarded cards, oldest first.
    #[must_use]
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }

    /// Returns the configured random cut bounds.
    #[must_use]
    pub const fn cut_range(&self) -> (usize, usize) {
        self.cut_range
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Renders the deck in four rows of `len / 4` cards, with any remainder on a
/// fifth, shorter row. Fewer than four cards share a single row.
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.cards.len() / 4;
        let (full, rest) = self.cards.split_at(width * 4);

        let rows = full
            .chunks(width.max(1))
            .chain(Some(rest).filter(|rest| !rest.is_empty()));
        for (row_index, row) in rows.enumerate() {
            if row_index > 0 {
                f.write_str("\n")?;
            }
            for (index, card) in row.iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{card}")?;
            }
        }
        Ok(())
    }
}
