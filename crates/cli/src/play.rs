// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive free play and quiz modes.
use anyhow::{Result, anyhow};
use dialoguer::{Confirm, Input};
use rand::{SeedableRng, rngs::StdRng};
use std::iter;
use vpoker_eval::{Card, Decision, Deck, HAND_SIZE, Hand, HoldMask, decide};

use crate::game::{PayTable, replace_discards};

/// The interactive modes configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compare the player holds with the strategy holds.
    pub quiz: bool,
    /// The deck shuffle seed.
    pub seed: Option<u64>,
}

/// Deals hands until the player stops.
pub fn run(config: Config) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let table = PayTable::default();
    let mut credits = 0i64;
    let mut correct = 0;

    for hand_no in 1.. {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let mut cards = deal(&mut deck)?;
        let hand = Hand::new(&cards)?;

        println!("Hand #{hand_no}");
        println!("{hand}");

        let holds = prompt_holds()?;

        if config.quiz {
            let decision = decide(&hand);
            if decision.holds == holds {
                correct += 1;
                println!("Correct.");
            } else {
                let Decision { holds: best, play } = decision;
                println!("ERROR! (Optimal play: {best} {play})");
            }
        }

        let draws = iter::from_fn(|| deck.deal());
        replace_discards(&mut cards, holds, draws)?;
        let last = Hand::new(&cards)?;
        let score = last.classify();

        let payout = table.payout(score);
        credits += payout as i64 - PayTable::BET as i64;

        println!("{last}");
        println!("{score}, won {payout}, credits {credits}");
        if config.quiz {
            println!("Score {correct}/{hand_no}");
        }

        let again = Confirm::new()
            .with_prompt("Deal again?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }

        println!("{}", "-".repeat(30));
    }

    Ok(())
}

fn deal(deck: &mut Deck) -> Result<[Card; HAND_SIZE]> {
    let cards = iter::from_fn(|| deck.deal())
        .take(HAND_SIZE)
        .collect::<Vec<_>>();

    cards
        .try_into()
        .map_err(|cards: Vec<Card>| anyhow!("Deck has only {} cards", cards.len()))
}

/// Reads the positions to hold, like `"124"` or an empty line to draw five
/// cards.
fn prompt_holds() -> Result<HoldMask> {
    let input = Input::<String>::new()
        .with_prompt("Hold")
        .allow_empty(true)
        .validate_with(|s: &String| s.parse::<HoldMask>().map(|_| ()))
        .interact_text()?;

    Ok(input.parse()?)
}
