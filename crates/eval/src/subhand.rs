// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Partial hands and their draws.
use std::fmt;
use vpoker_cards::{Card, Rank, Suit};

use crate::{
    Error, HoldMask, RankCounts, Result,
    shapes::{
        FOUR_TO_ROYAL_FLUSH, FOUR_TO_STRAIGHT_FLUSH, HighCards, SPREAD_FIVE_ONE_HIGH_CARD,
        StraightFlushKind, THREE_TO_ROYAL_FLUSH, find_shape,
    },
};

/// A three or four cards royal flush draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoyalDraw {
    /// The draw positions in the dealt hand.
    pub holds: HoldMask,
    /// The draw suit.
    pub suit: Suit,
    /// For a three cards draw with a ten and an ace, the other royal rank.
    pub ten_ace: Option<Rank>,
}

/// A three cards straight flush draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightFlushDraw {
    /// The draw positions in the dealt hand.
    pub holds: HoldMask,
    /// The draw suit.
    pub suit: Suit,
    /// Set for type 2 draws spanning five ranks with one high card.
    pub spread: Option<Spread>,
}

/// A three cards straight flush draw spanning five ranks, the highest rank
/// is four ranks above the lowest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spread {
    /// The lowest rank, ace low.
    pub lowest: Rank,
    /// The rank between the lowest and the highest.
    pub middle: Rank,
}

impl Spread {
    /// Checks if a rank would fill one of the two gaps of this draw.
    pub fn fills_gap(&self, rank: Rank) -> bool {
        let low = self.lowest.index();
        rank.index() > low && rank.index() < low + 4 && rank != self.middle
    }
}

/// A two cards suited draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitedDraw {
    /// The draw positions in the dealt hand.
    pub holds: HoldMask,
    /// The draw suit.
    pub suit: Suit,
}

/// A selection of one to four cards of a dealt hand.
///
/// The cards are the dealt cards at the positions flagged in the subhand
/// holds, in the dealt order.
#[derive(Clone, PartialEq, Eq)]
pub struct Subhand {
    cards: [Card; Subhand::MAX_SIZE],
    size: usize,
    counts: RankCounts,
    holds: HoldMask,
}

impl Subhand {
    /// The maximum number of cards in a subhand.
    pub const MAX_SIZE: usize = 4;

    /// Creates a subhand from its cards and their positions in a hand.
    pub fn new(cards: &[Card], holds: HoldMask) -> Result<Self> {
        if cards.is_empty() || cards.len() > Self::MAX_SIZE {
            return Err(Error::SubhandSize(cards.len()));
        }

        if holds.count() != cards.len() {
            return Err(Error::HoldMismatch {
                holds,
                cards: cards.len(),
            });
        }

        let mut buf = [cards[0]; Self::MAX_SIZE];
        buf[..cards.len()].copy_from_slice(cards);

        Ok(Self {
            cards: buf,
            size: cards.len(),
            counts: RankCounts::new(cards),
            holds,
        })
    }

    /// Builds the subhand of the dealt cards at the given positions.
    pub(crate) fn from_positions(dealt: &[Card], positions: &[usize]) -> Self {
        debug_assert!((1..=Self::MAX_SIZE).contains(&positions.len()));

        let mut cards = [dealt[positions[0]]; Self::MAX_SIZE];
        for (idx, &pos) in positions.iter().enumerate() {
            cards[idx] = dealt[pos];
        }

        let size = positions.len();
        Self {
            cards,
            size,
            counts: RankCounts::new(&cards[..size]),
            holds: HoldMask::from_positions(positions),
        }
    }

    /// The subhand cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards[..self.size]
    }

    /// The number of cards.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The positions of the cards in the dealt hand.
    pub fn holds(&self) -> HoldMask {
        self.holds
    }

    /// The rank counts of the subhand cards.
    pub fn counts(&self) -> &RankCounts {
        &self.counts
    }

    /// Checks if all cards have the same suit.
    pub fn is_all_same_suit(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards().iter().all(|c| c.suit() == suit)
    }

    /// Returns the draw if this three or four cards subhand is a royal flush
    /// draw.
    ///
    /// Panics if the subhand does not have three or four cards.
    pub fn royal_flush_draw(&self) -> Option<RoyalDraw> {
        let matched = match self.size {
            4 => find_shape(FOUR_TO_ROYAL_FLUSH, &self.counts).is_some(),
            3 => find_shape(THREE_TO_ROYAL_FLUSH, &self.counts).is_some(),
            n => panic!("Royal flush draws need 3 or 4 cards, got {n}"),
        };

        if !matched || !self.is_all_same_suit() {
            return None;
        }

        let has_ten_ace = self.size == 3 && self.counts.has_all(&[Rank::Ten, Rank::Ace]);
        let ten_ace = if has_ten_ace {
            [Rank::Jack, Rank::Queen, Rank::King]
                .into_iter()
                .find(|&r| self.counts.has(r))
        } else {
            None
        };

        Some(RoyalDraw {
            holds: self.holds,
            suit: self.cards[0].suit(),
            ten_ace,
        })
    }

    /// Checks if this four cards subhand is a straight flush draw.
    ///
    /// Panics if the subhand does not have four cards.
    pub fn is_four_to_straight_flush(&self) -> bool {
        assert_eq!(self.size, 4, "Four to a straight flush needs 4 cards");
        self.is_all_same_suit() && find_shape(FOUR_TO_STRAIGHT_FLUSH, &self.counts).is_some()
    }

    /// Returns the draw if this three cards subhand is a straight flush draw
    /// of the given kind.
    ///
    /// Panics if the subhand does not have three cards.
    pub fn three_to_straight_flush(&self, kind: StraightFlushKind) -> Option<StraightFlushDraw> {
        assert_eq!(self.size, 3, "Three to a straight flush needs 3 cards");
        if !self.is_all_same_suit() {
            return None;
        }

        find_shape(kind.shapes(), &self.counts)?;

        let spread = match kind {
            StraightFlushKind::Type2 => {
                let shape = find_shape(SPREAD_FIVE_ONE_HIGH_CARD, &self.counts);
                shape.map(|&[lowest, middle, _]| Spread { lowest, middle })
            }
            _ => None,
        };

        Some(StraightFlushDraw {
            holds: self.holds,
            suit: self.cards[0].suit(),
            spread,
        })
    }

    /// Checks if this subhand is exactly a ten, jack, queen and king.
    pub fn is_unsuited_tjqk(&self) -> bool {
        self.is_unsuited_ranks(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King])
    }

    /// Checks if this subhand has exactly the given distinct ranks, suits
    /// are ignored.
    pub fn is_unsuited_ranks(&self, ranks: &[Rank]) -> bool {
        self.size == ranks.len() && self.counts.has_all(ranks)
    }

    /// Returns the suit if this two cards subhand has the two given ranks of
    /// the same suit.
    pub fn suited_ranks(&self, r1: Rank, r2: Rank) -> Option<Suit> {
        let suited = self.is_unsuited_ranks(&[r1, r2]) && self.is_all_same_suit();
        suited.then(|| self.cards[0].suit())
    }

    /// Checks if this subhand is a single card of the given rank.
    pub fn is_single_rank(&self, rank: Rank) -> bool {
        self.size == 1 && self.cards[0].rank() == rank
    }

    /// Checks if this four cards subhand is an inside straight draw with the
    /// given number of high cards.
    ///
    /// Panics if the subhand does not have four cards.
    pub fn is_four_to_inside_straight(&self, high_cards: HighCards) -> bool {
        assert_eq!(self.size, 4, "Four to an inside straight needs 4 cards");
        find_shape(high_cards.shapes(), &self.counts).is_some()
    }

    /// Checks if this four cards subhand is four ranks in sequence that can
    /// be completed at both ends.
    ///
    /// Panics if the subhand does not have four cards.
    pub fn is_four_to_outside_straight(&self) -> bool {
        assert_eq!(self.size, 4, "Four to an outside straight needs 4 cards");

        let mut ranks = self.cards().iter().map(|c| c.rank()).collect::<Vec<_>>();
        ranks.sort();

        let lowest = ranks[0];
        if matches!(
            lowest,
            Rank::Ace | Rank::Ten | Rank::Jack | Rank::Queen | Rank::King
        ) {
            return false;
        }

        ranks
            .iter()
            .enumerate()
            .all(|(i, r)| r.index() == lowest.index() + i)
    }

    /// Checks for three cards of the same rank.
    pub fn is_three_of_a_kind(&self) -> bool {
        self.counts.is_three_of_a_kind()
    }

    /// Checks for two pairs.
    pub fn is_two_pair(&self) -> bool {
        self.counts.is_two_pair()
    }

    /// Checks for a pair of jacks or better.
    pub fn is_jacks_or_better(&self) -> bool {
        self.counts.is_jacks_or_better()
    }

    /// Checks for a pair of deuces through tens.
    pub fn is_low_pair(&self) -> bool {
        self.counts.is_low_pair()
    }
}

impl fmt::Display for Subhand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Subhand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subhand({self}, holds={})", self.holds)
    }
}
