//! A shared table: one locked deck and the seated players.

use alloc::string::String;
use alloc::vec::Vec;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{CreateError, CutError, DealError, PlayerError, TableError};
use crate::options::DeckOptions;
use crate::player::Player;
use crate::sync::Mutex;

/// A deck and the players drawing from it.
///
/// Every operation holds the locks it needs for its whole duration, so each
/// call is atomic. Locks are always taken seats first, then deck.
///
/// # Example
///
/// ```
/// use cardtable::{DeckOptions, Table};
///
/// let table = Table::new(&DeckOptions::default(), 42).unwrap();
/// let alice = table.join("alice", 50).unwrap();
/// let bob = table.join("bob", 50).unwrap();
/// table.deal_round().unwrap();
/// assert_eq!(table.hand(alice).unwrap().len(), 1);
/// assert_eq!(table.hand(bob).unwrap().len(), 1);
/// assert_eq!(table.cards_remaining(), 50);
/// ```
#[derive(Debug)]
pub struct Table {
    /// The deck being dealt from.
    pub deck: Mutex<Deck>,
    /// Seated players in joining order.
    seats: Mutex<Vec<(u8, Player)>>,
}

impl Table {
    /// Creates a table with a freshly populated and shuffled deck.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe an invalid deck.
    pub fn new(options: &DeckOptions, seed: u64) -> Result<Self, CreateError> {
        let mut deck = Deck::new(seed);
        deck.create(options)?.shuffle();

        Ok(Self {
            deck: Mutex::new(deck),
            seats: Mutex::new(Vec::new()),
        })
    }

    /// Seats a new player under the lowest free seat id and returns it.
    ///
    /// Ids of players who left are handed out again.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::NonPositiveChips`] if `chips` is zero and
    /// [`PlayerError::TableFull`] if every id is taken.
    pub fn join(&self, name: impl Into<String>, chips: usize) -> Result<u8, PlayerError> {
        let player = Player::new(name, chips)?;
        let mut seats = self.seats.lock();
        let id = (0..=u8::MAX)
            .find(|candidate| seats.iter().all(|(id, _)| id != candidate))
            .ok_or(PlayerError::TableFull)?;
        debug!(seat = id, player = %player.name(), chips, "player joined");
        seats.push((id, player));
        Ok(id)
    }

    /// Removes a player from the table, returning them with their hand.
    pub fn leave(&self, player_id: u8) -> Option<Player> {
        let mut seats = self.seats.lock();
        let index = seats.iter().position(|(id, _)| *id == player_id)?;
        Some(seats.remove(index).1)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.seats.lock().len()
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Deals the top card of the deck to one player.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PlayerNotFound`] for an unknown seat and
    /// [`DealError::EmptyDeck`] when the deck is exhausted.
    pub fn deal_to(&self, player_id: u8) -> Result<Card, TableError> {
        let mut seats = self.seats.lock();
        let player = seat_mut(&mut seats, player_id)?;
        let card = self.deck.lock().deal(false)?;
        player.receive_card(card);
        Ok(card)
    }

    /// Deals one card to every seated player in joining order.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] without dealing anything if the deck
    /// holds fewer cards than there are players.
    pub fn deal_round(&self) -> Result<Vec<(u8, Card)>, TableError> {
        let mut seats = self.seats.lock();
        let mut deck = self.deck.lock();
        if deck.len() < seats.len() {
            return Err(DealError::EmptyDeck.into());
        }

        let mut dealt = Vec::with_capacity(seats.len());
        for (id, player) in seats.iter_mut() {
            let card = deck.deal(false)?;
            player.receive_card(card);
            dealt.push((*id, card));
        }
        drop(deck);
        drop(seats);

        debug!(players = dealt.len(), "round dealt");
        Ok(dealt)
    }

    /// Places a bet for a player.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PlayerNotFound`] for an unknown seat or
    /// [`TableError::Bet`] if the player cannot cover the bet.
    pub fn bet(&self, player_id: u8, amount: usize, all_in: bool) -> Result<usize, TableError> {
        let mut seats = self.seats.lock();
        let player = seat_mut(&mut seats, player_id)?;
        Ok(player.bet(amount, all_in)?)
    }

    /// Folds a player's hand onto the deck's pile and returns the folded cards.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::PlayerNotFound`] for an unknown seat.
    pub fn fold(&self, player_id: u8) -> Result<Vec<Card>, TableError> {
        let mut seats = self.seats.lock();
        let player = seat_mut(&mut seats, player_id)?;
        let folded = player.fold();
        self.deck.lock().discard(folded.iter().copied());
        Ok(folded)
    }

    /// Shuffles the deck.
    pub fn shuffle(&self) {
        self.deck.lock().shuffle();
    }

    /// Cuts the deck. See [`Deck::cut`].
    ///
    /// # Errors
    ///
    /// Returns [`CutError::OutOfRange`] if `position` exceeds the deck size.
    pub fn cut(&self, position: Option<usize>) -> Result<usize, CutError> {
        self.deck.lock().cut(position)
    }

    /// Returns a copy of a player's hand.
    pub fn hand(&self, player_id: u8) -> Option<Vec<Card>> {
        self.seats
            .lock()
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, player)| player.hand().to_vec())
    }

    /// Returns a player's chip balance.
    pub fn chips(&self, player_id: u8) -> Option<usize> {
        self.seats
            .lock()
            .iter()
            .find(|(id, _)| *id == player_id)
            .map(|(_, player)| player.chips())
    }
}

fn seat_mut(seats: &mut [(u8, Player)], player_id: u8) -> Result<&mut Player, TableError> {
    seats
        .iter_mut()
        .find(|(id, _)| *id == player_id)
        .map(|(_, player)| player)
        .ok_or(TableError::PlayerNotFound)
}
