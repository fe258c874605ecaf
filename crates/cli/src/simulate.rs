// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Strategy simulation over random deals.
use anyhow::{Result, bail};
use log::info;
use std::{
    fmt,
    sync::{
        OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    time::Instant,
};
use vpoker_eval::{Card, Deck, HAND_SIZE, Hand, HandScore, decide};

use crate::game::{PayTable, replace_discards};

/// Each sample has the dealt cards followed by the replacement cards.
const SAMPLE_SIZE: usize = 2 * HAND_SIZE;

/// The simulation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The number of hands to play.
    pub hands: u64,
    /// The number of parallel tasks.
    pub tasks: usize,
    /// The random generator seed.
    pub seed: Option<u64>,
    /// Log each hand.
    pub debug: bool,
}

/// The final hands counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [u64; HandScore::COUNT],
}

impl Tally {
    /// The number of final hands with the given category.
    pub fn count(&self, score: HandScore) -> u64 {
        self.counts[score as usize]
    }

    /// The number of played hands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The number of final hands that pay.
    pub fn wins(&self) -> u64 {
        HandScore::scores()
            .filter(HandScore::is_paying)
            .map(|score| self.count(score))
            .sum()
    }

    /// The coins won with the given pay table.
    pub fn income(&self, table: &PayTable) -> u64 {
        HandScore::scores()
            .map(|score| self.count(score) * table.payout(score))
            .sum()
    }

    /// The coins bet.
    pub fn cost(&self) -> u64 {
        self.total() * PayTable::BET
    }

    /// The income to cost ratio.
    pub fn return_rate(&self, table: &PayTable) -> f64 {
        match self.cost() {
            0 => 0.0,
            cost => self.income(table) as f64 / cost as f64,
        }
    }

    fn add(&mut self, score: HandScore) {
        self.counts[score as usize] += 1;
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = PayTable::default();
        let total = self.total();

        writeln!(f, "Total plays: {total}")?;
        for score in HandScore::scores().rev() {
            let count = self.count(score);
            let freq = if total > 0 {
                count as f64 / total as f64
            } else {
                0.0
            };
            writeln!(f, "{:<16} {count:>10} ({freq:.6})", score.to_string())?;
        }

        writeln!(f, "Wins  : {}", self.wins())?;
        writeln!(f, "Income: {}", self.income(&table))?;
        writeln!(f, "Cost  : {}", self.cost())?;
        write!(f, "RoR   : {:.4}", self.return_rate(&table))
    }
}

/// Plays the configured number of hands and prints the results.
pub fn run(config: Config) -> Result<()> {
    let now = Instant::now();
    let tally = simulate(&config)?;
    let elapsed = now.elapsed().as_secs_f64();

    println!("{tally}");
    info!(
        "Played {} hands in {elapsed:.3}s ({:.0} hands/sec)",
        tally.total(),
        tally.total() as f64 / elapsed
    );

    Ok(())
}

/// Plays the configured number of hands and counts the final hands.
pub fn simulate(config: &Config) -> Result<Tally> {
    if config.tasks == 0 {
        bail!("At least one task is needed");
    }

    if config.hands < config.tasks as u64 {
        bail!(
            "Cannot split {} hands across {} tasks",
            config.hands,
            config.tasks
        );
    }

    // Per task counters to avoid contention.
    let task_counters = (0..config.tasks)
        .map(|_| {
            (0..HandScore::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let played = AtomicU64::new(0);
    let failure = OnceLock::new();
    let samples_per_task = config.hands.div_ceil(config.tasks as u64) as usize;

    Deck::default().par_sample(
        config.tasks,
        samples_per_task,
        SAMPLE_SIZE,
        config.seed,
        |task_id, sample| {
            // The last round can have more samples than hands left.
            if played.fetch_add(1, Ordering::Relaxed) >= config.hands {
                return;
            }

            match play_hand(sample, config.debug) {
                Ok(score) => {
                    let counters = &task_counters[task_id];
                    counters[score as usize].fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    let e = e.context(format!("Task {task_id} sample {sample:?}"));
                    // Keep the first failure only.
                    let _ = failure.set(e);
                }
            }
        },
    );

    if let Some(e) = failure.into_inner() {
        return Err(e);
    }

    let mut tally = Tally::default();
    for counters in &task_counters {
        for (score, counter) in HandScore::scores().zip(counters) {
            tally.counts[score as usize] += counter.load(Ordering::Relaxed);
        }
    }

    Ok(tally)
}

/// Plays the first five cards of the sample and replaces the discards with
/// the following cards.
fn play_hand(sample: &[Card], debug: bool) -> Result<HandScore> {
    let (dealt, draws) = sample.split_at(HAND_SIZE);
    let hand = Hand::new(dealt)?;
    let decision = decide(&hand);

    let mut cards = *hand.cards();
    let draws = draws.iter().copied();
    replace_discards(&mut cards, decision.holds, draws)?;

    let last = Hand::new(&cards)?;
    let score = last.classify();

    if debug {
        info!(
            "{hand} hold {} ({}) -> {last} {score}",
            decision.holds, decision.play
        );
    }

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vpoker_cards::parse_cards;

    #[test]
    fn tally_stats() {
        let mut tally = Tally::default();
        tally.add(HandScore::RoyalFlush);
        tally.add(HandScore::JacksOrBetter);
        tally.add(HandScore::None);
        tally.add(HandScore::None);

        let table = PayTable::default();
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.count(HandScore::None), 2);
        assert_eq!(tally.wins(), 2);
        assert_eq!(tally.income(&table), 4005);
        assert_eq!(tally.cost(), 20);
        assert!((tally.return_rate(&table) - 200.25).abs() < 1e-9);

        assert_eq!(Tally::default().return_rate(&table), 0.0);

        let report = tally.to_string();
        assert!(report.starts_with("Total plays: 4\nRoyal Flush"));
        assert!(report.contains("\nWins  : 2\nIncome: 4005\n"));
        assert!(report.ends_with("RoR   : 200.2500"));
    }

    #[test]
    fn play_sample() {
        let sample = parse_cards("Ks Qs Js Ts 2h As 3c 4c 5c 6c").unwrap();
        assert_eq!(play_hand(&sample, false).unwrap(), HandScore::RoyalFlush);

        let sample = parse_cards("2c 5d 7h 9s 3d Ah Ad As Kc Kd").unwrap();
        assert_eq!(play_hand(&sample, true).unwrap(), HandScore::FullHouse);

        // Duplicate dealt cards and missing draws fail the hand.
        let sample = parse_cards("Ah Ah 3c 4c 5c 6c 7c 8c 9c Tc").unwrap();
        assert!(play_hand(&sample, false).is_err());

        let sample = parse_cards("2c 5d 7h 9s 3d Ah Ad").unwrap();
        assert!(play_hand(&sample, false).is_err());
    }

    #[test]
    fn simulate_hands() {
        let config = Config {
            hands: 2_000,
            tasks: 4,
            seed: Some(7),
            debug: false,
        };

        let tally = simulate(&config).unwrap();
        assert_eq!(tally.total(), 2_000);
        assert_eq!(simulate(&config).unwrap(), tally);

        // The last round stops at the requested hands.
        let config = Config {
            hands: 1_001,
            tasks: 4,
            seed: None,
            debug: false,
        };
        assert_eq!(simulate(&config).unwrap().total(), 1_001);

        let config = Config {
            hands: 2,
            tasks: 4,
            seed: None,
            debug: false,
        };
        assert!(simulate(&config).is_err());
    }
}
