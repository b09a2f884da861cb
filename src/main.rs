use clap::{Parser, Subcommand};
use serde::Serialize;
use std::time::Instant;
use tron_sim::card::CardCatalog;
use tron_sim::card::CardRef;
use tron_sim::rng::GameRng;
use tron_sim::simulation::deck::{build_deck, parse_deck_file};
use tron_sim::simulation::engine::{run_trial, TrialConfig, MAX_TURNS};
use tron_sim::simulation::harness::{hand_size_table, keep_rate, run_batch, BatchSummary};
use tron_sim::simulation::mulligan::MulliganRule;

#[derive(Parser)]
#[command(name = "tron-sim")]
#[command(about = "Tron assembly simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base seed; trial i uses seed + i
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Deck file to use (built-in list if omitted)
    #[arg(short, long, global = true)]
    deck: Option<String>,

    /// Card catalog file (built-in catalog if omitted)
    #[arg(short, long, global = true)]
    cards: Option<String>,

    /// Print a turn-by-turn trace of a single trial
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a batch of trials (default)
    Run {
        /// Number of trials to simulate
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Mulligan rule
        #[arg(short, long, value_enum, default_value = "vancouver")]
        rule: MulliganRule,

        /// Fixed opening hand size instead of the mulligan loop
        #[arg(long)]
        hand_size: Option<usize>,

        /// Be on the draw instead of on the play
        #[arg(long)]
        draw: bool,

        /// Stop a trial after this many turns
        #[arg(long, default_value_t = MAX_TURNS)]
        max_turns: u32,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assembly turn for each fixed hand size from 7 down to 3
    Table {
        /// Number of trials per hand size
        #[arg(short, long, default_value = "1000")]
        games: usize,

        /// Mulligan rule
        #[arg(short, long, value_enum, default_value = "vancouver")]
        rule: MulliganRule,

        /// Be on the draw instead of on the play
        #[arg(long)]
        draw: bool,

        /// Stop a trial after this many turns
        #[arg(long, default_value_t = MAX_TURNS)]
        max_turns: u32,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keep rate of each mulligan rule
    Mulligan {
        /// Number of mulligan sequences per rule
        #[arg(short, long, default_value = "10000")]
        games: usize,
    },
}

/// Envelope for `--json` output
#[derive(Serialize)]
struct Report<'a, T: Serialize> {
    generated_at: String,
    deck: &'a str,
    results: T,
}

fn main() {
    let cli = Cli::parse();

    let catalog = load_catalog(cli.cards.as_deref());
    let deck = load_deck(cli.deck.as_deref(), &catalog);
    let deck_name = cli.deck.as_deref().unwrap_or("built-in");

    let seed = cli.seed.unwrap_or_else(|| GameRng::new(None).seed());

    match cli.command {
        Some(Commands::Run {
            games,
            rule,
            hand_size,
            draw,
            max_turns,
            json,
        }) => {
            let config = TrialConfig {
                rule,
                on_draw: draw,
                hand_size,
                max_turns,
            };
            run_simulation(&deck, deck_name, &config, games, seed, cli.verbose, json);
        }
        Some(Commands::Table {
            games,
            rule,
            draw,
            max_turns,
            json,
        }) => {
            let config = TrialConfig {
                rule,
                on_draw: draw,
                hand_size: None,
                max_turns,
            };
            run_table(&deck, deck_name, &config, games, seed, json);
        }
        Some(Commands::Mulligan { games }) => {
            compare_mulligan_rules(&deck, games, seed);
        }
        None => {
            let games = if cli.verbose { 1 } else { 1000 };
            run_simulation(&deck, deck_name, &TrialConfig::default(), games, seed, cli.verbose, false);
        }
    }
}

fn load_catalog(path: Option<&str>) -> CardCatalog {
    let Some(path) = path else {
        return CardCatalog::standard();
    };

    match CardCatalog::from_file(path) {
        Ok(catalog) => {
            eprintln!("✓ Loaded {} cards from {}", catalog.card_count(), path);
            catalog
        }
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_deck(path: Option<&str>, catalog: &CardCatalog) -> Vec<CardRef> {
    let result = match path {
        Some(path) => parse_deck_file(path, catalog),
        None => build_deck(catalog),
    };

    match result {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("✗ Failed to build deck '{}': {}", path.unwrap_or("built-in"), e);
            std::process::exit(1);
        }
    }
}

fn print_json<T: Serialize>(deck_name: &str, results: T) {
    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        deck: deck_name,
        results,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("✗ Failed to serialize results: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_simulation(
    deck: &[CardRef],
    deck_name: &str,
    config: &TrialConfig,
    games: usize,
    seed: u64,
    verbose: bool,
    json: bool,
) {
    if verbose {
        match run_trial(deck, config, seed, true) {
            Ok(result) if json => print_json(deck_name, result),
            Ok(_) => {}
            Err(e) => {
                eprintln!("✗ Trial aborted: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let start = Instant::now();
    let summary = run_batch(deck, config, games, seed, !json);
    let elapsed = start.elapsed();

    if json {
        print_json(deck_name, summary);
        return;
    }

    println!("\n=== Tron Assembly Simulator ===\n");
    println!("Deck: {} ({} cards)", deck_name, deck.len());
    println!("Trials: {}", games);
    println!("Seed: {}", seed);
    println!(
        "Rule: {:?}, {}",
        config.rule,
        if config.on_draw { "on the draw" } else { "on the play" }
    );
    if let Some(size) = config.hand_size {
        println!("Hand size: {}", size);
    }
    println!();

    print_summary(&summary);

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} trials/sec)",
        elapsed,
        games as f64 / elapsed.as_secs_f64()
    );
}

fn print_summary(summary: &BatchSummary) {
    println!("=== Results ===\n");
    match (summary.mean_turns, summary.median_turns) {
        (Some(mean), Some(median)) => {
            println!("Average assembly turn: {:.2}", mean);
            println!("Median assembly turn: {:.1}", median);
        }
        _ => println!("Combo never assembled"),
    }
    println!("Average mulligans: {:.2}", summary.average_mulligans);
    println!();

    let completed = summary.assembled + summary.capped;
    println!("Turn distribution:");
    for (turn, count) in &summary.distribution {
        let pct = *count as f64 / completed.max(1) as f64 * 100.0;
        let bar = "█".repeat((pct / 2.0) as usize);
        println!("  Turn {:2}: {:5.1}% {} ({})", turn, pct, bar, count);
    }

    if summary.capped > 0 {
        let pct = summary.capped as f64 / completed as f64 * 100.0;
        println!("  Capped: {:5.1}% ({})", pct, summary.capped);
    }
    if summary.aborted > 0 {
        println!("  Aborted: {}", summary.aborted);
    }
}

fn run_table(deck: &[CardRef], deck_name: &str, config: &TrialConfig, games: usize, seed: u64, json: bool) {
    let table = hand_size_table(deck, config, games, seed, !json);

    if json {
        print_json(deck_name, table);
        return;
    }

    println!("\n=== Assembly Turn by Hand Size ===\n");
    println!("Deck: {}  Trials per size: {}  Seed: {}", deck_name, games, seed);
    println!("Rule: {:?}\n", config.rule);
    println!(
        "{:>5} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Hand", "Mean", "Median", "By T3", "By T4", "Capped"
    );
    println!("{:-<51}", "");

    for summary in &table {
        println!(
            "{:>5} {:>8} {:>8} {:>7.1}% {:>7.1}% {:>8}",
            summary.config.hand_size.unwrap_or_default(),
            summary.mean_turns.map_or("-".to_string(), |m| format!("{:.2}", m)),
            summary.median_turns.map_or("-".to_string(), |m| format!("{:.1}", m)),
            summary.assembled_by(3) * 100.0,
            summary.assembled_by(4) * 100.0,
            summary.capped,
        );
    }
}

fn compare_mulligan_rules(deck: &[CardRef], games: usize, seed: u64) {
    println!("\n=== Mulligan Keep Rates ===\n");
    println!("Sequences per rule: {}  Seed: {}\n", games, seed);

    for rule in [MulliganRule::Vancouver, MulliganRule::Paris, MulliganRule::London] {
        match keep_rate(deck, rule, games, seed) {
            Ok(rate) => println!("{:>10}: {:.3}", format!("{:?}", rule), rate),
            Err(e) => {
                eprintln!("✗ {:?} aborted: {}", rule, e);
                std::process::exit(1);
            }
        }
    }
}
