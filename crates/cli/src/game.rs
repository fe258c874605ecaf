// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pay table and draw helpers shared by the game modes.
use anyhow::{Result, bail};
use vpoker_eval::{Card, HAND_SIZE, HandScore, HoldMask};

/// Payouts per category for a bet of [PayTable::BET] coins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayTable {
    payouts: [u64; HandScore::COUNT],
}

impl PayTable {
    /// The coins bet on each hand.
    pub const BET: u64 = 5;

    /// The full pay 9/6 Jacks or Better table.
    pub const NINE_SIX: PayTable = PayTable {
        payouts: [0, 5, 10, 15, 20, 30, 45, 125, 250, 4000],
    };

    /// The coins paid for a final hand category.
    pub fn payout(&self, score: HandScore) -> u64 {
        self.payouts[score as usize]
    }
}

impl Default for PayTable {
    fn default() -> Self {
        Self::NINE_SIX
    }
}

/// Replaces the discarded cards with the given draws, discarded positions
/// are replaced in increasing order.
///
/// Returns the number of cards drawn.
pub fn replace_discards<I>(
    cards: &mut [Card; HAND_SIZE],
    holds: HoldMask,
    draws: I,
) -> Result<usize>
where
    I: IntoIterator<Item = Card>,
{
    let mut draws = draws.into_iter();
    let mut drawn = 0;

    for pos in holds.discards() {
        let Some(card) = draws.next() else {
            let discards = HAND_SIZE - holds.count();
            bail!("Not enough cards to replace {discards} discards");
        };

        cards[pos] = card;
        drawn += 1;
    }

    Ok(drawn)
}
