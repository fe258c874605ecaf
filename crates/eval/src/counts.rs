// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank occurrence counts.
use vpoker_cards::{Card, Rank};

/// Number of occurrences of each rank in a set of cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankCounts([u8; Rank::COUNT]);

impl RankCounts {
    /// Counts the ranks of the given cards.
    pub fn new(cards: &[Card]) -> Self {
        let mut counts = [0; Rank::COUNT];
        for card in cards {
            counts[card.rank().index()] += 1;
        }

        Self(counts)
    }

    /// The number of cards with the given rank.
    #[inline]
    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.index()]
    }

    /// Checks if there is at least one card with the given rank.
    #[inline]
    pub fn has(&self, rank: Rank) -> bool {
        self.count(rank) > 0
    }

    /// Checks if all the given ranks are present.
    pub fn has_all(&self, ranks: &[Rank]) -> bool {
        ranks.iter().all(|&r| self.has(r))
    }

    /// The total number of counted cards.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    /// Iterates over the ranks with their counts, skipping absent ranks.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        Rank::ranks()
            .zip(self.0.iter().copied())
            .filter(|&(_, count)| count > 0)
    }

    /// Checks for four cards of the same rank.
    pub fn is_four_of_a_kind(&self) -> bool {
        self.0.contains(&4)
    }

    /// Checks for three cards of a rank and a pair of a different rank.
    pub fn is_full_house(&self) -> bool {
        self.0.contains(&3) && self.0.contains(&2)
    }

    /// Checks for three cards of the same rank.
    pub fn is_three_of_a_kind(&self) -> bool {
        self.0.contains(&3)
    }

    /// Checks for two pairs of different ranks.
    pub fn is_two_pair(&self) -> bool {
        self.0.iter().filter(|&&c| c == 2).count() == 2
    }

    /// Checks for a pair of jacks, queens, kings or aces.
    pub fn is_jacks_or_better(&self) -> bool {
        Rank::ranks()
            .filter(|r| r.is_high())
            .any(|r| self.count(r) == 2)
    }

    /// Checks for a pair of deuces through tens.
    pub fn is_low_pair(&self) -> bool {
        Rank::ranks()
            .filter(|r| !r.is_high())
            .any(|r| self.count(r) == 2)
    }
}
