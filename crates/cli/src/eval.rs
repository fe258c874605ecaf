// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation of typed hands.
use anyhow::Result;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use vpoker_eval::{Card, HAND_SIZE, Hand, HandScore, HoldMask, decide};

/// The evaluation configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The hands to evaluate, read from stdin if empty.
    pub hands: Vec<String>,
    /// Print results as JSON.
    pub json: bool,
}

/// A hand evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// The hand cards.
    pub cards: [Card; HAND_SIZE],
    /// The hand category.
    pub score: HandScore,
    /// The kept positions flags.
    pub holds: HoldMask,
    /// The kept positions, one based.
    pub held: String,
    /// The rule that chose the holds.
    pub play: String,
}

impl Evaluation {
    /// Classifies a hand and chooses its holds.
    pub fn new(hand: &Hand) -> Self {
        let decision = decide(hand);
        Self {
            cards: *hand.cards(),
            score: hand.classify(),
            holds: decision.holds,
            held: decision.holds.to_string(),
            play: decision.play.to_string(),
        }
    }
}

/// Evaluates the configured hands or the lines read from stdin.
pub fn run(config: Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.hands.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                report(&mut out, &line, config.json)?;
            }
        }
    } else {
        for hand in &config.hands {
            report(&mut out, hand, config.json)?;
        }
    }

    Ok(())
}

fn report<W: Write>(out: &mut W, line: &str, json: bool) -> Result<()> {
    let hand = match line.parse::<Hand>() {
        Ok(hand) => hand,
        Err(e) => {
            log::debug!("{line}: {e}");
            writeln!(out, "Invalid cards.")?;
            return Ok(());
        }
    };

    let eval = Evaluation::new(&hand);
    if json {
        serde_json::to_writer(&mut *out, &eval)?;
        writeln!(out)?;
    } else {
        let (score, held, play) = (eval.score, &eval.held, &eval.play);
        writeln!(out, "{hand}: {score} hold {held} ({play})")?;
    }

    Ok(())
}
