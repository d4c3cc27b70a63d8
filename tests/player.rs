//! Player integration tests.

use cardtable::{
    BetError, Card, DEFAULT_CHIPS, DEFAULT_RAISE, Face, Player, PlayerError, Points, Rank, Suite,
};

fn card(suite: Suite, face: Face) -> Card {
    Card::new(suite, Rank::new(face, None))
}

#[test]
fn zero_chips_are_rejected() {
    assert_eq!(
        Player::new("alice", 0).unwrap_err(),
        PlayerError::NonPositiveChips
    );
    assert_eq!(Player::with_default_chips("bob").chips(), DEFAULT_CHIPS);
}

#[test]
fn received_cards_keep_their_order() {
    let mut player = Player::new("alice", 10).unwrap();
    assert_eq!(player.name(), "alice");
    assert!(player.hand().is_empty());

    let ace = Card::new(Suite::Spade, Rank::new(Face::Ace, Some(Points::Either(1, 11))));
    let king = card(Suite::Heart, Face::King);
    player.receive_card(ace);
    player.receive_card(king);

    assert_eq!(player.hand(), &[ace, king]);
    assert_eq!(player.hand_summary(), "\u{2660}A, \u{2665}K");
}

#[test]
fn empty_hand_summary_names_the_player() {
    let player = Player::new("alice", 10).unwrap();
    assert_eq!(player.hand_summary(), "alice has no cards in hand.");
}

#[test]
fn bet_deducts_chips() {
    let mut player = Player::new("alice", 100).unwrap();
    assert_eq!(player.bet(30, false).unwrap(), 30);
    assert_eq!(player.chips(), 70);
    assert_eq!(player.bet(70, false).unwrap(), 70);
    assert_eq!(player.chips(), 0);
}

#[test]
fn bet_over_balance_is_rejected() {
    let mut player = Player::new("alice", 100).unwrap();
    assert_eq!(
        player.bet(150, false).unwrap_err(),
        BetError::InsufficientChips {
            requested: 150,
            available: 100,
        }
    );
    assert_eq!(player.chips(), 100);
}

#[test]
fn all_in_bets_the_whole_balance() {
    let mut player = Player::new("alice", 100).unwrap();
    assert_eq!(player.bet(5, true).unwrap(), 100);
    assert_eq!(player.chips(), 0);
    assert_eq!(player.bet(0, true).unwrap(), 0);
}

#[test]
fn call_and_raise_wrap_bet() {
    let mut player = Player::new("alice", 20).unwrap();
    assert_eq!(player.call(5).unwrap(), 5);
    assert_eq!(player.raise_bet(DEFAULT_RAISE, false).unwrap(), 1);
    assert_eq!(player.chips(), 14);
    assert!(matches!(
        player.call(15),
        Err(BetError::InsufficientChips { .. })
    ));
    assert_eq!(player.raise_bet(DEFAULT_RAISE, true).unwrap(), 14);
    assert_eq!(player.chips(), 0);
}

#[test]
fn winnings_are_credited() {
    let mut player = Player::new("alice", 10).unwrap();
    player.bet(10, false).unwrap();
    player.win(25);
    assert_eq!(player.chips(), 25);
}

#[test]
fn fold_empties_the_hand() {
    let mut player = Player::new("alice", 10).unwrap();
    let two = card(Suite::Club, Face::Two);
    let three = card(Suite::Diamond, Face::Three);
    player.receive_card(two);
    player.receive_card(three);

    assert_eq!(player.fold(), vec![two, three]);
    assert!(player.hand().is_empty());
    assert!(player.fold().is_empty());
}
