//! CLI table example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use solojack::{
    Card, DealerHand, Hand, HandStatus, RoundState, Suit, Table, TableEvent, TableOptions,
};

fn main() {
    println!("Blackjack table example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_starting_bankroll(500);
    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Config error: {err}");
            return;
        }
    };

    loop {
        if table.bankroll() == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        println!(
            "\nBankroll: {}  |  Running count: {}  |  Shoe: {:.2} decks left",
            table.bankroll(),
            table.running_count(),
            table.cards_remaining() as f64 / 52.0
        );

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{}, 0 to quit): ", table.bankroll()))
        else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = table.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }
        if let Err(err) = table.deal() {
            println!("Deal error: {err}");
            let _ = table.clear_bet();
            continue;
        }
        report_events(&mut table);

        while table.state() == RoundState::PlayerTurn {
            show_table(&table);

            let mut choices = String::from("(h)it, (s)tand");
            if table.can_double() {
                choices.push_str(", (d)ouble");
            }
            if table.can_split() {
                choices.push_str(", s(p)lit");
            }

            let action = prompt_line(&format!("Hand {}: {choices}? ", table.active_hand() + 1));
            let outcome = match action.as_str() {
                "h" => table.hit().map(|_| ()),
                "s" => table.stand(),
                "d" => table.double_down().map(|_| ()),
                "p" => table.split(),
                "q" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = outcome {
                println!("Action error: {err}");
            }
            report_events(&mut table);
        }

        if table.state() == RoundState::DealerTurn {
            if let Err(err) = table.dealer_play() {
                println!("Dealer error: {err}");
                continue;
            }
            report_events(&mut table);
        }

        show_table(&table);

        match table.settle() {
            Ok(result) => {
                for hand in &result.hands {
                    println!(
                        "Hand {}: {} (payout {})",
                        hand.hand_index + 1,
                        hand.outcome,
                        hand.payout
                    );
                }
                println!("Total payout: {}", result.total_payout);
            }
            Err(err) => println!("Settle error: {err}"),
        }
        report_events(&mut table);
    }
}

fn report_events(table: &mut Table) {
    for event in table.drain_events() {
        if event == TableEvent::ShuffleOccurred {
            println!("Shoe reshuffled; count reset.");
        }
    }
}

fn show_table(table: &Table) {
    println!("Dealer: {}", dealer_line(table.dealer_hand()));
    for (index, hand) in table.hands().iter().enumerate() {
        let marker = if index == table.active_hand() && table.state() == RoundState::PlayerTurn {
            ">"
        } else {
            " "
        };
        println!("{marker} Hand {}: {}", index + 1, hand_line(hand));
    }
}

fn dealer_line(hand: &DealerHand) -> String {
    if hand.is_hole_revealed() {
        let cards: Vec<String> = hand.cards().iter().map(card_label).collect();
        format!("{} = {}", cards.join(" "), hand.value())
    } else {
        let up = hand.up_card().map_or_else(|| "?".into(), card_label);
        format!("{up} ?? = {}", hand.visible_value())
    }
}

fn hand_line(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(card_label).collect();
    let status = match hand.status() {
        HandStatus::Active => "",
        HandStatus::Stand => " (stand)",
        HandStatus::Bust => " (bust)",
        HandStatus::Blackjack => " (blackjack)",
    };
    format!(
        "{} = {}{status} [bet {}]",
        cards.join(" "),
        hand.value(),
        hand.bet()
    )
}

fn card_label(card: &Card) -> String {
    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    };
    let suit = match card.suit {
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
        Suit::Clubs => "♣",
        Suit::Spades => "♠",
    };
    format!("{rank}{suit}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".into();
    }
    line.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" {
            return None;
        }
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
