// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold masks over the positions of a dealt hand.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, HAND_SIZE};

/// The cards to keep on the draw.
///
/// A flag is set for each position of the dealt hand to keep, positions
/// refer to the five dealt cards even when the mask describes a quality
/// found in a smaller selection of those cards.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[bool; HAND_SIZE]", into = "[bool; HAND_SIZE]")]
pub struct HoldMask(u8);

impl HoldMask {
    /// Discard all cards.
    pub const NONE: HoldMask = HoldMask(0);

    /// Keep all cards.
    pub const ALL: HoldMask = HoldMask((1 << HAND_SIZE) - 1);

    /// Creates a mask that keeps the given positions.
    ///
    /// Panics if a position is not in 0..5.
    pub fn from_positions(positions: &[usize]) -> Self {
        positions.iter().fold(Self::NONE, |mask, &pos| {
            assert!(pos < HAND_SIZE, "Invalid hold position {pos}");
            Self(mask.0 | (1 << pos))
        })
    }

    /// Checks if the card at the given position is kept.
    #[inline]
    pub fn is_held(&self, pos: usize) -> bool {
        pos < HAND_SIZE && self.0 & (1 << pos) != 0
    }

    /// The number of kept cards.
    pub fn count(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// The kept positions in increasing order.
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HAND_SIZE).filter(move |&pos| self.is_held(pos))
    }

    /// The discarded positions in increasing order.
    pub fn discards(&self) -> impl Iterator<Item = usize> + '_ {
        (0..HAND_SIZE).filter(move |&pos| !self.is_held(pos))
    }

    /// The mask as an array of flags, `true` for a kept card.
    pub fn to_array(&self) -> [bool; HAND_SIZE] {
        std::array::from_fn(|pos| self.is_held(pos))
    }
}

impl From<[bool; HAND_SIZE]> for HoldMask {
    fn from(flags: [bool; HAND_SIZE]) -> Self {
        let bits = flags
            .iter()
            .enumerate()
            .filter(|&(_, &held)| held)
            .fold(0, |bits, (pos, _)| bits | (1 << pos));
        Self(bits)
    }
}

impl From<HoldMask> for [bool; HAND_SIZE] {
    fn from(mask: HoldMask) -> Self {
        mask.to_array()
    }
}

/// Formats the kept positions, 1-based, e.g. `"125"`, or `"-"` if none.
impl fmt::Display for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            return write!(f, "-");
        }

        for pos in self.positions() {
            write!(f, "{}", pos + 1)?;
        }

        Ok(())
    }
}

impl fmt::Debug for HoldMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HoldMask({self})")
    }
}

/// Parses 1-based positions like `"125"`, spaces are ignored and an empty
/// string or `"-"` discards all cards.
impl FromStr for HoldMask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "-" {
            return Ok(Self::NONE);
        }

        let mut mask = Self::NONE;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let pos = match c.to_digit(10) {
                Some(d @ 1..=5) => d as usize - 1,
                _ => return Err(Error::InvalidHolds(s.to_string())),
            };

            if mask.is_held(pos) {
                return Err(Error::InvalidHolds(s.to_string()));
            }

            mask.0 |= 1 << pos;
        }

        Ok(mask)
    }
}
