//! CLI table demo: one human seat against a house bot.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use bjtable::{
    Action, ActionPrompt, DiscardSettlement, Outcome, PlayerProfile, Rank, RoomId, RoundResult,
    Table, TableOptions, TurnView,
};

/// Prompts the human seat on stdin; plays a fixed policy for the bot seat.
struct ConsolePrompt;

#[async_trait]
impl ActionPrompt for ConsolePrompt {
    async fn request_action(&self, view: TurnView) -> Action {
        if view.seat != 0 {
            // House bot draws to 17, like the dealer.
            return if view.score < 17 {
                Action::Hit
            } else {
                Action::Stand
            };
        }

        let line = tokio::task::spawn_blocking(move || {
            print!(
                "{}: {} (score {}), dealer shows {}. Hit? (y/n): ",
                view.player_name,
                format_cards(&view.cards),
                view.score,
                view.dealer_up_card
            );
            let _ = io::stdout().flush();
            read_line()
        })
        .await
        .unwrap_or_default();

        if matches!(line.as_str(), "y" | "yes" | "h" | "hit") {
            Action::Hit
        } else {
            Action::Stand
        }
    }
}

fn read_line() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Rank]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_result(result: &RoundResult) {
    println!(
        "\nDealer: {} (score {})",
        format_cards(&result.dealer_cards),
        result.dealer_score
    );
    for seat in &result.seats {
        let verdict = match seat.outcome {
            Outcome::PlayerBust => "busts",
            Outcome::DealerBust => "wins, dealer busts",
            Outcome::PlayerWins => "wins",
            Outcome::DealerWins => "loses",
            Outcome::Push => "pushes",
            Outcome::Aborted => "aborted",
        };
        println!(
            "{}: {} (score {}) {verdict}",
            seat.player_name,
            format_cards(&seat.cards),
            seat.score
        );
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let table = match Table::with_players(
        RoomId::new("cli-demo"),
        TableOptions::default(),
        seed,
        vec![
            PlayerProfile::new("you", "You", 500),
            PlayerProfile::new("bot", "House bot", 500),
        ],
    ) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("could not open the table: {err}");
            return;
        }
    };

    println!("Blackjack table ('q' quits between rounds)");

    loop {
        match table.play_round(&ConsolePrompt, &DiscardSettlement).await {
            Ok(result) => print_result(&result),
            Err(err) => {
                eprintln!("round failed: {err}");
                break;
            }
        }

        print!("\nAnother round? (y/n): ");
        let _ = io::stdout().flush();
        let line = read_line();
        if !matches!(line.as_str(), "y" | "yes") {
            println!("Goodbye.");
            break;
        }
    }
}
