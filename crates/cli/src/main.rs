// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better video poker CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

pub mod eval;
pub mod game;
pub mod play;
pub mod simulate;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play hands and choose the cards to hold.
    Play {
        /// The deck shuffle seed.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Play hands and compare the holds with the optimal strategy.
    Quiz {
        /// The deck shuffle seed.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Play random hands with the optimal strategy and report the returns.
    Simulate {
        /// Number of hands to play.
        #[clap(long, short = 'n', default_value_t = 1_000_000,
               value_parser = clap::value_parser!(u64).range(1..))]
        hands: u64,
        /// Number of parallel tasks.
        #[clap(long, short, default_value_t = 4,
               value_parser = clap::value_parser!(u16).range(1..=256))]
        tasks: u16,
        /// The random generator seed, runs are reproducible when the number
        /// of tasks divides the number of hands.
        #[clap(long)]
        seed: Option<u64>,
        /// Log every hand, hold and result.
        #[clap(long)]
        debug: bool,
    },
    /// Classify hands and show the cards to hold.
    Eval {
        /// Hands like "Ah Kd Tc 2s 9h", read from stdin if none.
        hands: Vec<String>,
        /// Print one JSON object per hand.
        #[clap(long)]
        json: bool,
    },
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play { seed } => play::run(play::Config { quiz: false, seed }),
        Command::Quiz { seed } => play::run(play::Config { quiz: true, seed }),
        Command::Simulate {
            hands,
            tasks,
            seed,
            debug,
        } => simulate::run(simulate::Config {
            hands,
            tasks: tasks as usize,
            seed,
            debug,
        }),
        Command::Eval { hands, json } => eval::run(eval::Config { hands, json }),
    }
}
