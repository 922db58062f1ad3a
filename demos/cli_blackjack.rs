//! CLI blackjack demo.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use bjcore::{Card, Game, Hand, Outcome, Rules};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Single-player blackjack at the console, one unit per hand.
#[derive(Debug, Parser)]
struct Args {
    /// Number of decks in the shoe.
    #[arg(long, default_value_t = 1)]
    decks: u8,
    /// Dealer hits soft 17 (default is to stand).
    #[arg(long)]
    h17: bool,
    /// Blackjack payout multiplier.
    #[arg(long, default_value_t = 1.5)]
    blackjack_pays: f64,
    /// Starting bankroll in units.
    #[arg(long, default_value_t = 10.0)]
    bankroll: f64,
    /// Seed for a reproducible shoe.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rules = Rules::default()
        .with_decks(args.decks)
        .with_dealer_hits_soft_17(args.h17)
        .with_blackjack_pays(args.blackjack_pays);

    if let Err(err) = rules.validate() {
        eprintln!("Invalid rules: {err}");
        return;
    }

    let mut game = match args.seed {
        Some(seed) => Game::seeded(rules, seed),
        None => Game::new(rules),
    };

    println!(
        "Blackjack CLI - {} deck(s), {}, blackjack pays {} (type 'q' to quit)",
        rules.decks.max(1),
        if rules.dealer_hits_soft_17 { "H17" } else { "S17" },
        rules.blackjack_pays
    );

    let mut bankroll = args.bankroll;
    while bankroll > 0.0 {
        println!("\nBankroll: {bankroll} | Bet: 1");
        game.deal_initial();
        print_table(&game, true);

        if !game.player().is_blackjack() && !game.dealer().is_blackjack() {
            loop {
                match prompt_line("[H]it or [S]tand? ").as_str() {
                    "h" | "hit" => {
                        if let Err(err) = game.hit() {
                            println!("Action error: {err}");
                            break;
                        }
                        print_table(&game, true);
                        if game.player().is_bust() {
                            break;
                        }
                    }
                    "s" | "stand" => break,
                    "q" | "quit" => return,
                    _ => println!("Unknown action. Use H or S."),
                }
            }
        }

        if !game.player().is_bust() {
            let drawn = game.dealer_play();
            if !drawn.is_empty() {
                println!("Dealer draws {} card(s).", drawn.len());
            }
        }
        print_table(&game, false);

        match game.settle() {
            Ok(settlement) => {
                bankroll += settlement.net(1.0);
                println!("Result: {}", describe(settlement.outcome, settlement.payout));
            }
            Err(err) => println!("Settle error: {err}"),
        }

        if matches!(prompt_line("Another hand? [Y/n] ").as_str(), "n" | "no" | "q") {
            break;
        }
    }

    if bankroll <= 0.0 {
        println!("You are out of money. Game over.");
    }
    println!("\nThanks for playing.");
}

fn describe(outcome: Outcome, payout: f64) -> String {
    let text = match outcome {
        Outcome::PlayerBlackjack => "Blackjack!",
        Outcome::PlayerWin => "You win!",
        Outcome::DealerWin => "You lose",
        Outcome::Push => "Push",
        Outcome::PlayerBust => "You bust",
        Outcome::DealerBust => "Dealer busts!",
    };
    format!("{text} {payout:+}")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    // Treat end of input like quitting.
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, hide_hole: bool) {
    println!("\nDealer: {}", format_dealer(game.dealer(), hide_hole));
    println!("Player: {}", game.player());
}

fn format_dealer(dealer: &Hand, hide_hole: bool) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if !hide_hole {
        return dealer.to_string();
    }

    let mut parts: Vec<String> = dealer.up_card().map(Card::to_string).into_iter().collect();
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    parts.join(" ")
}
