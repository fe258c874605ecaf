// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better video poker evaluator.
//!
//! Classifies five cards hands into their paying category and chooses which
//! cards to hold on the draw following a fixed priority strategy.
//!
//! ```
//! # use vpoker_eval::*;
//! let hand = "Ks Qs Js Ts 2h".parse::<Hand>().unwrap();
//! assert_eq!(classify(&hand), HandScore::None);
//!
//! // Hold the four cards to a royal flush and draw one.
//! let holds = hold(&hand);
//! assert_eq!(holds.to_string(), "1234");
//! assert_eq!(holds.discards().collect::<Vec<_>>(), vec![4]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod counts;
mod error;
mod hand;
mod holds;
mod score;
pub mod shapes;
pub mod strategy;
mod subhand;

pub use counts::RankCounts;
pub use error::{Error, Result};
pub use hand::Hand;
pub use holds::HoldMask;
pub use score::HandScore;
pub use shapes::{HighCards, StraightFlushKind};
pub use strategy::{Decision, Play, Quality, decide, hold};
pub use subhand::{RoyalDraw, Spread, StraightFlushDraw, Subhand, SuitedDraw};

// Reexport cards types.
pub use vpoker_cards::{Card, Deck, Rank, Suit};

/// The number of cards in a dealt hand.
pub const HAND_SIZE: usize = 5;

/// Returns the hand paying category.
pub fn classify(hand: &Hand) -> HandScore {
    hand.classify()
}
