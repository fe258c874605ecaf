// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better payout categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The payout category of a five cards hand, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandScore {
    /// Nothing that pays.
    None = 0,
    /// A pair of jacks, queens, kings or aces.
    JacksOrBetter,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight in the same suit.
    StraightFlush,
    /// Ten to ace in the same suit.
    RoyalFlush,
}

impl HandScore {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from worst to best.
    pub fn scores() -> impl DoubleEndedIterator<Item = HandScore> {
        use HandScore::*;
        [
            None,
            JacksOrBetter,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// Checks if the category pays anything.
    pub fn is_paying(&self) -> bool {
        *self != HandScore::None
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandScore::None => "Nothing",
            HandScore::JacksOrBetter => "Jacks or Better",
            HandScore::TwoPair => "Two Pair",
            HandScore::ThreeOfAKind => "Three of a Kind",
            HandScore::Straight => "Straight",
            HandScore::Flush => "Flush",
            HandScore::FullHouse => "Full House",
            HandScore::FourOfAKind => "Four of a Kind",
            HandScore::StraightFlush => "Straight Flush",
            HandScore::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}
