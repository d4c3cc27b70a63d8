//! Card types: suites, faces, point values and cards.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseError;

/// Card suite.
///
/// Suites order by their sort rank: spade, heart, diamond, club.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suite {
    /// Spades (♠).
    Spade,
    /// Hearts (♥).
    Heart,
    /// Diamonds (♦).
    Diamond,
    /// Clubs (♣).
    Club,
}

impl Suite {
    /// All four suites in sort-rank order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Heart, Self::Diamond, Self::Club];

    /// Parses a suite name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidSuite`] unless `name` is one of
    /// `spade`, `heart`, `diamond` or `club`.
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        Self::ALL
            .into_iter()
            .find(|suite| suite.name().eq_ignore_ascii_case(name))
            .ok_or(ParseError::InvalidSuite)
    }

    /// Returns the canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "spade",
            Self::Heart => "heart",
            Self::Diamond => "diamond",
            Self::Club => "club",
        }
    }

    /// Returns the Unicode display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spade => '\u{2660}',
            Self::Heart => '\u{2665}',
            Self::Diamond => '\u{2666}',
            Self::Club => '\u{2663}',
        }
    }

    /// Returns the fixed sort rank (1 = spade through 4 = club).
    #[must_use]
    pub const fn sort_rank(self) -> u8 {
        match self {
            Self::Spade => 1,
            Self::Heart => 2,
            Self::Diamond => 3,
            Self::Club => 4,
        }
    }
}

impl FromStr for Suite {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())?;
        for c in self.name().chars() {
            write!(f, "{}", c.to_ascii_uppercase())?;
        }
        Ok(())
    }
}

/// The printed value of a card, independent of the points it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Joker. Only produced by the deck factory; never parsed from a token.
    Joker,
}

impl Face {
    /// The thirteen standard faces, Ace through King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Parses a rank token: `A`, `J`, `Q`, `K` (any case) or `2` through `10`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidRank`] for any other token.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let numeric = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
        if numeric && !token.starts_with('0') {
            return token
                .parse::<u8>()
                .map_err(|_| ParseError::InvalidRank)
                .and_then(Self::try_from);
        }
        Self::ALL
            .into_iter()
            .find(|face| face.token().eq_ignore_ascii_case(token))
            .ok_or(ParseError::InvalidRank)
    }

    /// Returns the short token printed on the card.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Joker => "Joker",
        }
    }

    /// Returns the canonical English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }

    /// Returns the plain ascending value: Ace = 1 through King = 13, Joker = 0.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Joker => 0,
        }
    }

    /// Returns whether this is a Jack, Queen or King.
    #[must_use]
    pub const fn is_court(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl TryFrom<u8> for Face {
    type Error = ParseError;

    /// Accepts the numeric faces 2 through 10.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=10 => Ok(Self::ALL[value as usize - 1]),
            _ => Err(ParseError::InvalidRank),
        }
    }
}

impl FromStr for Face {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Points scored by a rank.
///
/// Most ranks score a single value. Dual-valued ranks (the blackjack Ace)
/// carry both alternatives so scoring code can pick one deterministically
/// with [`Points::best_fit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Points {
    /// A single point value.
    Fixed(u8),
    /// Two alternative values, low first.
    Either(u8, u8),
}

impl Points {
    /// Returns the smallest alternative.
    #[must_use]
    pub const fn low(self) -> u8 {
        match self {
            Self::Fixed(value) => value,
            Self::Either(a, b) => {
                if a <= b {
                    a
                } else {
                    b
                }
            }
        }
    }

    /// Returns the largest alternative.
    #[must_use]
    pub const fn high(self) -> u8 {
        match self {
            Self::Fixed(value) => value,
            Self::Either(a, b) => {
                if a >= b {
                    a
                } else {
                    b
                }
            }
        }
    }

    /// Returns whether more than one value is possible.
    #[must_use]
    pub const fn is_dual(self) -> bool {
        matches!(self, Self::Either(..))
    }

    /// Picks the value to add to `total` without exceeding `limit`.
    ///
    /// The high alternative is chosen when it fits, otherwise the low one.
    #[must_use]
    pub const fn best_fit(self, total: u8, limit: u8) -> u8 {
        let high = self.high();
        if total.saturating_add(high) <= limit {
            high
        } else {
            self.low()
        }
    }
}

impl Points {
    /// Totals a set of points as close to `limit` as possible without going over.
    ///
    /// Every value starts at its low alternative; dual values are then raised
    /// one at a time while the total still fits. If even the low total exceeds
    /// `limit`, that low total is returned.
    pub fn best_total<I>(points: I, limit: u8) -> u8
    where
        I: IntoIterator<Item = Self>,
    {
        let mut total: u8 = 0;
        let mut upgrades = Vec::new();
        for value in points {
            total = total.saturating_add(value.low());
            if value.is_dual() {
                upgrades.push(value.high() - value.low());
            }
        }

        for extra in upgrades {
            if total.saturating_add(extra) <= limit {
                total += extra;
            }
        }
        total
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{value}"),
            Self::Either(a, b) => write!(f, "{a}/{b}"),
        }
    }
}

/// A face together with the points it scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rank {
    face: Face,
    points: Points,
}

impl Rank {
    /// Creates a rank, using the plain ascending default when `points` is `None`.
    #[must_use]
    pub const fn new(face: Face, points: Option<Points>) -> Self {
        let points = match points {
            Some(points) => points,
            None => Points::Fixed(face.ordinal()),
        };
        Self { face, points }
    }

    /// Parses a rank token with an optional point override.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidRank`] if the token is not a standard face.
    pub fn parse(token: &str, points: Option<Points>) -> Result<Self, ParseError> {
        Face::parse(token).map(|face| Self::new(face, points))
    }

    /// Returns the face.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Returns the canonical name, e.g. `Ace`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.face.name()
    }

    /// Returns the short token, e.g. `A`.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        self.face.token()
    }

    /// Returns the resolved point value.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.points
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.points == Points::Fixed(1) {
            "point"
        } else {
            "points"
        };
        write!(f, "{} ({} {unit})", self.name(), self.points)
    }
}

/// A playing card.
///
/// Two cards are equal when suite and face match; points are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    /// The suite of the card.
    pub suite: Suite,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suite: Suite, rank: Rank) -> Self {
        Self { suite, rank }
    }

    /// Returns the face of the card.
    #[must_use]
    pub const fn face(&self) -> Face {
        self.rank.face()
    }

    /// Returns the points the card scores.
    #[must_use]
    pub const fn points(&self) -> Points {
        self.rank.points()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suite == other.suite && self.face() == other.face()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suite.hash(state);
        self.face().hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suite.symbol(), self.face().token())
    }
}

/// Number of cards in a standard deck without jokers.
pub const DECK_SIZE: usize = 52;
