// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluator errors.
use thiserror::Error;
use vpoker_cards::{Card, ParseCardError};

/// Errors building hands and hold masks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hand must have exactly five cards.
    #[error("a hand must have 5 cards, got {0}")]
    HandSize(usize),
    /// A subhand must have one to four cards.
    #[error("a subhand must have 1 to 4 cards, got {0}")]
    SubhandSize(usize),
    /// The subhand holds flags do not match its cards.
    #[error("hold mask {holds} does not select {cards} cards")]
    HoldMismatch {
        /// The hold mask.
        holds: crate::HoldMask,
        /// The number of cards.
        cards: usize,
    },
    /// The same card appears twice in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// Invalid hold positions text.
    #[error("invalid holds '{0}', expected positions 1 to 5")]
    InvalidHolds(String),
    /// Invalid card text.
    #[error(transparent)]
    Card(#[from] ParseCardError),
}

/// Evaluator result type.
pub type Result<T> = std::result::Result<T, Error>;
