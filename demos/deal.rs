//! Deals a few cards to two players from a cut and shuffled deck.

use std::time::{SystemTime, UNIX_EPOCH};

use cardtable::{Card, DeckOptions, GameVariant, Points, Table};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cardtable=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DeckOptions::default().with_variant(GameVariant::Blackjack);
    let table = match Table::new(&options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Could not build the deck: {err}");
            return;
        }
    };

    let players = [("alice", 100), ("bob", 50)]
        .into_iter()
        .filter_map(|(name, chips)| table.join(name, chips).ok())
        .collect::<Vec<_>>();

    match table.cut(None) {
        Ok(position) => println!("Deck cut at {position}."),
        Err(err) => println!("Cut error: {err}"),
    }

    for _ in 0..2 {
        if let Err(err) = table.deal_round() {
            println!("Deal error: {err}");
            return;
        }
    }

    for &id in &players {
        if let Err(err) = table.bet(id, 10, false) {
            println!("Bet error: {err}");
        }
    }

    let seats = players.len();
    for id in players {
        let hand = table.hand(id).unwrap_or_default();
        let total = Points::best_total(hand.iter().map(Card::points), 21);
        let cards = hand
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Seat {id}: {cards} ({total} points), {} chips left",
            table.chips(id).unwrap_or(0)
        );
    }

    println!("{seats} players, {} cards left:", table.cards_remaining());
    println!("{}", table.deck.lock());
}
