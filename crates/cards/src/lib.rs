// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker cards types.
//!
//! This crate define types to create cards using the two characters text
//! codes used by video poker tools:
//!
//! ```
//! # use vpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "Ah");
//! assert_eq!("Ah".parse(), Ok(ah));
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all the 5 cards deals:
//!
//! ```no_run
//! # use vpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! The **`parallel`** feature enables parallel sampling with a given number
//! of tasks, the following example uses 4 tasks each sampling 10 times the
//! 10 cards needed to play a video poker hand:
//!
//! ```
//! # #[cfg(feature = "parallel")]
//! # fn par_sample() {
//! # use std::sync::atomic;
//! # use vpoker_cards::Deck;
//! let counter = atomic::AtomicU64::new(0);
//! Deck::default().par_sample(4, 10, 10, None, |task_id, cards| {
//!     assert_eq!(cards.len(), 10);
//!     counter.fetch_add(1, atomic::Ordering::Relaxed);
//! });
//! assert_eq!(counter.load(atomic::Ordering::Relaxed), 40);
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod combos;
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
