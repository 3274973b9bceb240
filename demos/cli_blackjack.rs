//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjdealer::{Card, GameOptions, Interaction, Participant, Suit};

const DEALER_PACE: Duration = Duration::from_millis(500);

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut console = Console;
    match bjdealer::session::run(&mut console, GameOptions::default(), seed) {
        Ok(summary) => println!(
            "Thanks for playing! {} round(s): {} won, {} lost, {} pushed.",
            summary.rounds, summary.player_wins, summary.dealer_wins, summary.pushes
        ),
        Err(err) => eprintln!("Game error: {err}"),
    }
}

struct Console;

impl Interaction for Console {
    fn prompt_name(&mut self) -> String {
        println!("Greetings Player. What's your name?");
        prompt_line("").unwrap_or_default()
    }

    fn prompt_deck_count(&mut self) -> String {
        println!("How many decks would you like to use for this game? Hit [Enter] to use 1 deck.");
        prompt_line("").unwrap_or_default()
    }

    fn prompt_hit_or_stay(&mut self) -> String {
        // Closed stdin stays, so the round can still finish.
        prompt_line("You may hit [h] or stay [s] ").unwrap_or_else(|| "s".to_string())
    }

    fn prompt_play_again(&mut self) -> String {
        prompt_line("Play again [y/n]? ").unwrap_or_else(|| "n".to_string())
    }

    fn render_hands(&mut self, player: &Participant, dealer: &Participant) {
        println!("\nCurrent hands");
        println!("-----------------------------------");
        println!("{}", format_seat(dealer));
        println!("{}", format_seat(player));
        println!();
    }

    fn announce(&mut self, message: &str) {
        println!("{message}");
    }

    fn pace(&mut self) {
        thread::sleep(DEALER_PACE);
    }
}

/// Reads one line, or `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn format_seat(seat: &Participant) -> String {
    let label = format!("{} ({}):", seat.name(), seat.score());
    let cards = seat
        .hand()
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{label:>20} {cards}")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    format!("[{}]", colorize(&card.face(), color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
