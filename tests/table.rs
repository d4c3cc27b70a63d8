//! Table integration tests.

use std::collections::HashSet;
use std::thread;

use cardtable::{
    BetError, DECK_SIZE, DealError, DeckOptions, Face, PlayerError, Suite, Table, TableError,
};

fn table() -> Table {
    Table::new(&DeckOptions::default(), 42).unwrap()
}

#[test]
fn new_table_holds_a_shuffled_full_deck() {
    let table = table();
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.player_count(), 0);
    assert!(table.deck.lock().pile().is_empty());
}

#[test]
fn join_assigns_increasing_ids() {
    let table = table();
    assert_eq!(table.join("alice", 10).unwrap(), 0);
    assert_eq!(table.join("bob", 10).unwrap(), 1);
    assert_eq!(
        table.join("carol", 0).unwrap_err(),
        PlayerError::NonPositiveChips
    );
    assert_eq!(table.player_count(), 2);
}

#[test]
fn seat_ids_stay_unique_across_many_joins_and_leaves() {
    let table = table();
    let first = table.join("first", 10).unwrap();
    for i in 0..300 {
        let id = table.join(format!("guest{i}"), 10).unwrap();
        assert_ne!(id, first);
        assert_eq!(table.leave(id).unwrap().name(), format!("guest{i}"));
    }

    let later = table.join("later", 20).unwrap();
    assert_ne!(later, first);
    assert_eq!(table.bet(later, 15, false).unwrap(), 15);
    assert_eq!(table.chips(later), Some(5));
    assert_eq!(table.chips(first), Some(10));
}

#[test]
fn join_reuses_the_lowest_free_id_and_fills_up() {
    let table = table();
    let ids: Vec<_> = (0..=u8::MAX)
        .map(|i| table.join(format!("player{i}"), 1).unwrap())
        .collect();
    assert_eq!(ids.len(), 256);
    assert_eq!(
        table.join("overflow", 1).unwrap_err(),
        PlayerError::TableFull
    );

    table.leave(7).unwrap();
    assert_eq!(table.join("returning", 1).unwrap(), 7);
    assert_eq!(table.player_count(), 256);
}

#[test]
fn deal_round_gives_each_player_the_next_card() {
    let table = table();
    let alice = table.join("alice", 10).unwrap();
    let bob = table.join("bob", 10).unwrap();

    let top: Vec<_> = table.deck.lock().cards().iter().rev().take(2).copied().collect();
    let dealt = table.deal_round().unwrap();

    assert_eq!(dealt, vec![(alice, top[0]), (bob, top[1])]);
    assert_eq!(table.hand(alice).unwrap(), vec![top[0]]);
    assert_eq!(table.hand(bob).unwrap(), vec![top[1]]);
    assert_eq!(table.cards_remaining(), DECK_SIZE - 2);
    assert!(table.deck.lock().pile().is_empty());
}

#[test]
fn deal_round_without_enough_cards_deals_nothing() {
    let options = DeckOptions::default()
        .with_suites(&[Suite::Spade])
        .with_faces(&[Face::Ace]);
    let table = Table::new(&options, 1).unwrap();
    let alice = table.join("alice", 10).unwrap();
    let bob = table.join("bob", 10).unwrap();

    assert_eq!(
        table.deal_round().unwrap_err(),
        TableError::Deal(DealError::EmptyDeck)
    );
    assert_eq!(table.cards_remaining(), 1);
    assert!(table.hand(alice).unwrap().is_empty());
    assert!(table.hand(bob).unwrap().is_empty());
}

#[test]
fn deal_to_unknown_player_draws_nothing() {
    let table = table();
    assert_eq!(table.deal_to(7).unwrap_err(), TableError::PlayerNotFound);
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert_eq!(table.hand(7), None);
}

#[test]
fn bet_goes_through_the_seat() {
    let table = table();
    let alice = table.join("alice", 10).unwrap();

    assert_eq!(table.bet(alice, 4, false).unwrap(), 4);
    assert_eq!(table.chips(alice), Some(6));
    assert_eq!(
        table.bet(alice, 7, false).unwrap_err(),
        TableError::Bet(BetError::InsufficientChips {
            requested: 7,
            available: 6,
        })
    );
    assert_eq!(table.bet(9, 1, false).unwrap_err(), TableError::PlayerNotFound);
}

#[test]
fn fold_moves_the_hand_to_the_pile() {
    let table = table();
    let alice = table.join("alice", 10).unwrap();
    let first = table.deal_to(alice).unwrap();
    let second = table.deal_to(alice).unwrap();

    assert_eq!(table.fold(alice).unwrap(), vec![first, second]);
    assert!(table.hand(alice).unwrap().is_empty());
    assert_eq!(table.deck.lock().pile(), &[first, second]);
}

#[test]
fn leave_returns_the_player() {
    let table = table();
    let alice = table.join("alice", 10).unwrap();
    table.deal_to(alice).unwrap();

    let player = table.leave(alice).unwrap();
    assert_eq!(player.name(), "alice");
    assert_eq!(player.hand().len(), 1);
    assert!(table.leave(alice).is_none());
    assert_eq!(table.player_count(), 0);
}

#[test]
fn cut_and_shuffle_keep_the_deck_whole() {
    let table = table();
    assert_eq!(table.cut(Some(5)).unwrap(), 5);
    table.shuffle();
    assert_eq!(table.cards_remaining(), DECK_SIZE);
    assert!(table.cut(Some(DECK_SIZE + 1)).is_err());
}

#[test]
fn concurrent_deals_hand_out_each_card_once() {
    let table = table();
    let ids: Vec<_> = (0..4)
        .map(|i| table.join(format!("player{i}"), 10).unwrap())
        .collect();

    thread::scope(|scope| {
        for &id in &ids {
            let table = &table;
            scope.spawn(move || {
                for _ in 0..DECK_SIZE / 4 {
                    table.deal_to(id).unwrap();
                }
            });
        }
    });

    assert_eq!(table.cards_remaining(), 0);
    let mut seen = HashSet::new();
    for id in ids {
        let hand = table.hand(id).unwrap();
        assert_eq!(hand.len(), DECK_SIZE / 4);
        seen.extend(hand);
    }
    assert_eq!(seen.len(), DECK_SIZE);
}
