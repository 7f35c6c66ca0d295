//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use tabletop::{BlackjackOptions, Card, Deck, Hand, Round, RoundState, Suit, Winner};

/// Reshuffle once fewer cards than this remain.
const RESHUFFLE_BELOW: usize = 15;

fn main() {
    env_logger::init();
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = BlackjackOptions::default();
    let mut deck = Deck::new(seed);
    deck.shuffle();

    let mut wins = 0_u32;
    let mut losses = 0_u32;

    loop {
        if deck.cards_left() < RESHUFFLE_BELOW {
            deck.shuffle();
            println!("Deck reshuffled.");
        }

        let mut round = Round::new(options, deck);
        if let Err(err) = round.deal() {
            println!("Deal error: {err}");
            break;
        }

        while round.state() == RoundState::PlayerTurn {
            print_table(&round, false);

            let action = prompt_line("[h]it or [s]tand: ");
            let result = match action.as_str() {
                "h" | "hit" => round.hit().map(|card| println!("You draw the {card}.")),
                "s" | "stand" => round.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if round.state() == RoundState::DealerTurn {
            match round.dealer_play() {
                Ok(drawn) => {
                    for card in drawn {
                        println!("Dealer draws the {card}.");
                    }
                }
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        print_table(&round, true);
        if let Some(result) = round.result() {
            match result.winner {
                Winner::Player => {
                    wins += 1;
                    println!("You win ({:?}).", result.reason);
                }
                Winner::Dealer => {
                    losses += 1;
                    println!("Dealer wins ({:?}).", result.reason);
                }
                Winner::Push => println!("Push."),
            }
        }
        println!("Record: {wins} won, {losses} lost.");

        deck = round.into_deck();

        match prompt_line("Play again? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                break;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round, reveal: bool) {
    println!("\nDeck: {} cards remaining", round.deck().cards_left());

    let dealer = round.dealer_hand();
    if reveal {
        println!(
            "Dealer: {} (value {})",
            format_hand(dealer),
            dealer.blackjack_value()
        );
    } else {
        let up = dealer.card(0).map_or_else(|_| "??".to_string(), |c| format_card(&c));
        println!("Dealer: {up} ??");
    }

    let player = round.player_hand();
    println!(
        "You:    {} (value {})\n",
        format_hand(player),
        player.blackjack_value()
    );
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
