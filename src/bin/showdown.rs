use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};
use poker_showdown::cards::{parse_cards, Card};
use poker_showdown::deck::Deck;
use poker_showdown::showdown::{deal_table, Showdown};
use poker_showdown::table::Table;

#[derive(Debug, Parser)]
#[command(name = "showdown", version = poker_showdown::VERSION, about = "Classify poker hands and settle showdowns.")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify one or more hands given as card shorthand, e.g. "AS KS QS JS TS".
    Eval {
        /// One quoted hand of 5 to 7 cards per seat.
        #[arg(required = true)]
        hands: Vec<String>,
    },
    /// Seat players at a table and deal them a Hold'em showdown.
    Deal {
        /// Number of players at the table.
        #[arg(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=8))]
        players: u8,
        /// Chips each player sits down with.
        #[arg(long, default_value_t = 1000)]
        chips: u64,
        /// Big blind, must be even.
        #[arg(long, default_value_t = 20)]
        blind: u64,
        /// Seed for a reproducible shuffle. A random shuffle is used when absent.
        #[arg(long, short)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli.command) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    let seats: Vec<(usize, Vec<Card>)> = match command {
        Command::Eval { hands } => hands
            .iter()
            .map(|h| parse_cards(h).with_context(|| format!("cannot parse hand '{h}'")))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .enumerate()
            .collect(),
        Command::Deal { players, chips, blind, seed } => {
            let mut table = Table::new(chips, blind).context("invalid table rules")?;
            for seat in 0..usize::from(players) {
                table.add_player(format!("player{}", seat + 1), seat)?;
            }
            let mut deck = Deck::standard();
            match seed {
                Some(seed) => deck.shuffle_seeded(seed),
                None => deck.shuffle_with(&mut rand::rng()),
            }
            info!("{} players, {} chips each, blind {}", table.len(), table.starter_chips(), table.blind_size());
            deal_table(&table, &mut deck)?
        }
    };

    let refs: Vec<&[Card]> = seats.iter().map(|(_, cards)| cards.as_slice()).collect();
    let showdown = Showdown::evaluate(&refs)?;
    for ((seat, cards), hand) in seats.iter().zip(showdown.hands()) {
        let cards: Vec<String> = cards.iter().map(Card::to_string).collect();
        println!("seat {seat}: [{}] => {hand}", cards.join(" "));
    }

    let winners: Vec<usize> = showdown.winners().into_iter().map(|i| seats[i].0).collect();
    if showdown.is_chop() {
        info!("chop between seats {winners:?}");
    }
    println!("winners: {winners:?}");
    Ok(())
}
