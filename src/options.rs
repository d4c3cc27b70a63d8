//! Deck configuration: game variants and factory options.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::card::{Face, Points, Suite};
use crate::error::ParseError;

/// Point table used when populating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum GameVariant {
    /// Numeric faces score their value, court cards 10, Ace 1 or 11.
    #[default]
    Blackjack,
    /// Numeric faces score their value, J/Q/K 11/12/13, Ace high at 14.
    Poker,
    /// Numeric faces score their value, court cards 10, Ace 1.
    Rummy,
    /// Plain ascending values, Ace 1 through King 13.
    Standard,
}

impl GameVariant {
    /// All known variants.
    pub const ALL: [Self; 4] = [Self::Blackjack, Self::Poker, Self::Rummy, Self::Standard];

    /// Returns the variant name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blackjack => "blackjack",
            Self::Poker => "poker",
            Self::Rummy => "rummy",
            Self::Standard => "standard",
        }
    }

    /// Returns the points a face scores under this variant.
    #[must_use]
    pub const fn points(self, face: Face) -> Points {
        match (self, face) {
            (Self::Blackjack, Face::Ace) => Points::Either(1, 11),
            (Self::Poker, Face::Ace) => Points::Fixed(14),
            (Self::Blackjack | Self::Rummy, face) if face.is_court() => Points::Fixed(10),
            (_, face) => Points::Fixed(face.ordinal()),
        }
    }
}

impl FromStr for GameVariant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s))
            .ok_or(ParseError::InvalidVariant)
    }
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for [`Deck::create`](crate::Deck::create).
///
/// Use the builder methods to customize options:
///
/// ```
/// use cardtable::{DeckOptions, GameVariant, Points, Suite};
///
/// let options = DeckOptions::default()
///     .with_variant(GameVariant::Rummy)
///     .with_suites(&[Suite::Spade, Suite::Heart])
///     .with_jokers(Points::Fixed(50));
/// assert_eq!(options.variant, GameVariant::Rummy);
/// assert_eq!(options.suites.len(), 2);
/// assert_eq!(options.jokers, Some(Points::Fixed(50)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Point table to assign.
    pub variant: GameVariant,
    /// Suites to include, in deck order.
    pub suites: Vec<Suite>,
    /// Faces to include for each suite, in deck order.
    pub faces: Vec<Face>,
    /// When set, two jokers scoring these points are appended.
    pub jokers: Option<Points>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            variant: GameVariant::Blackjack,
            suites: Suite::ALL.to_vec(),
            faces: Face::ALL.to_vec(),
            jokers: None,
        }
    }
}

impl DeckOptions {
    /// Sets the point table.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{DeckOptions, GameVariant};
    ///
    /// let options = DeckOptions::default().with_variant(GameVariant::Poker);
    /// assert_eq!(options.variant, GameVariant::Poker);
    /// ```
    #[must_use]
    pub fn with_variant(mut self, variant: GameVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the suites to include.
    #[must_use]
    pub fn with_suites(mut self, suites: &[Suite]) -> Self {
        self.suites = suites.to_vec();
        self
    }

    /// Sets the faces to include.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{DeckOptions, Face};
    ///
    /// let options = DeckOptions::default().with_faces(&[Face::Ace, Face::King]);
    /// assert_eq!(options.faces, vec![Face::Ace, Face::King]);
    /// ```
    #[must_use]
    pub fn with_faces(mut self, faces: &[Face]) -> Self {
        self.faces = faces.to_vec();
        self
    }

    /// Adds two jokers scoring `points`.
    #[must_use]
    pub fn with_jokers(mut self, points: Points) -> Self {
        self.jokers = Some(points);
        self
    }
}
