// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank shapes of partial hands draws.
//!
//! Each table lists the rank sets, ordered ace low, that make a draw when
//! held in the same suit (or any suit for straights). A subhand with N cards
//! matches an N ranks shape only if it has exactly those ranks, see
//! [find_shape].
use vpoker_cards::Rank::{self, *};

use crate::RankCounts;

/// Four to a royal flush.
#[rustfmt::skip]
pub const FOUR_TO_ROYAL_FLUSH: &[[Rank; 4]] = &[
    [Ace, Ten, Jack, Queen], [Ace, Ten, Jack, King], [Ace, Ten, Queen, King],
    [Ace, Jack, Queen, King], [Ten, Jack, Queen, King],
];

/// Three to a royal flush.
#[rustfmt::skip]
pub const THREE_TO_ROYAL_FLUSH: &[[Rank; 3]] = &[
    [Ace, Ten, Jack], [Ace, Ten, Queen], [Ace, Ten, King], [Ace, Jack, Queen],
    [Ace, Jack, King], [Ace, Queen, King], [Ten, Jack, Queen], [Ten, Jack, King],
    [Ten, Queen, King], [Jack, Queen, King],
];

/// Four to a straight flush, ace low only, royal draws excluded.
#[rustfmt::skip]
pub const FOUR_TO_STRAIGHT_FLUSH: &[[Rank; 4]] = &[
    // No gap.
    [Ace, Deuce, Trey, Four], [Deuce, Trey, Four, Five], [Trey, Four, Five, Six],
    [Four, Five, Six, Seven], [Five, Six, Seven, Eight], [Six, Seven, Eight, Nine],
    [Seven, Eight, Nine, Ten], [Eight, Nine, Ten, Jack], [Nine, Ten, Jack, Queen],
    // Gap after the lowest card.
    [Ace, Trey, Four, Five], [Deuce, Four, Five, Six], [Trey, Five, Six, Seven],
    [Four, Six, Seven, Eight], [Five, Seven, Eight, Nine], [Six, Eight, Nine, Ten],
    [Seven, Nine, Ten, Jack], [Eight, Ten, Jack, Queen], [Nine, Jack, Queen, King],
    // Gap in the middle.
    [Ace, Deuce, Four, Five], [Deuce, Trey, Five, Six], [Trey, Four, Six, Seven],
    [Four, Five, Seven, Eight], [Five, Six, Eight, Nine], [Six, Seven, Nine, Ten],
    [Seven, Eight, Ten, Jack], [Eight, Nine, Jack, Queen], [Nine, Ten, Queen, King],
    // Gap before the highest card.
    [Ace, Deuce, Trey, Five], [Deuce, Trey, Four, Six], [Trey, Four, Five, Seven],
    [Four, Five, Six, Eight], [Five, Six, Seven, Nine], [Six, Seven, Eight, Ten],
    [Seven, Eight, Nine, Jack], [Eight, Nine, Ten, Queen], [Nine, Ten, Jack, King],
];

/// Three to a straight flush with at least as many high cards as gaps,
/// excluding ace low and 2-3-4.
#[rustfmt::skip]
pub const THREE_TO_STRAIGHT_FLUSH_TYPE1: &[[Rank; 3]] = &[
    [Trey, Four, Five], [Four, Five, Six], [Five, Six, Seven], [Six, Seven, Eight],
    [Seven, Eight, Nine], [Eight, Nine, Ten], [Eight, Nine, Jack], [Eight, Ten, Jack],
    [Eight, Jack, Queen], [Nine, Ten, Jack], [Nine, Ten, Queen], [Nine, Jack, Queen],
    [Nine, Jack, King], [Nine, Queen, King],
];

/// Three to a straight flush that are ace low, 2-3-4, one gap without high
/// cards, or two gaps with one high card.
#[rustfmt::skip]
pub const THREE_TO_STRAIGHT_FLUSH_TYPE2: &[[Rank; 3]] = &[
    [Ace, Deuce, Trey], [Ace, Deuce, Four], [Ace, Deuce, Five], [Ace, Trey, Four],
    [Ace, Trey, Five], [Ace, Four, Five], [Deuce, Trey, Four], [Deuce, Trey, Five],
    [Deuce, Four, Five], [Trey, Four, Six], [Trey, Five, Six], [Four, Five, Seven],
    [Four, Six, Seven], [Five, Six, Eight], [Five, Seven, Eight], [Six, Seven, Nine],
    [Six, Eight, Nine], [Seven, Eight, Ten], [Seven, Nine, Ten], [Seven, Eight, Jack],
    [Seven, Nine, Jack], [Seven, Ten, Jack], [Eight, Nine, Queen], [Eight, Ten, Queen],
    [Nine, Ten, King],
];

/// The type 2 shapes spanning five ranks with one high card.
#[rustfmt::skip]
pub const SPREAD_FIVE_ONE_HIGH_CARD: &[[Rank; 3]] = &[
    [Ace, Deuce, Five], [Ace, Trey, Five], [Ace, Four, Five],
    [Seven, Eight, Jack], [Seven, Nine, Jack], [Seven, Ten, Jack],
    [Eight, Nine, Queen], [Eight, Ten, Queen], [Nine, Ten, King],
];

/// Three to a straight flush with two gaps and no high cards.
#[rustfmt::skip]
pub const THREE_TO_STRAIGHT_FLUSH_TYPE3: &[[Rank; 3]] = &[
    [Deuce, Trey, Six], [Deuce, Four, Six], [Deuce, Five, Six], [Trey, Four, Seven],
    [Trey, Five, Seven], [Trey, Six, Seven], [Four, Five, Eight], [Four, Six, Eight],
    [Four, Seven, Eight], [Five, Six, Nine], [Five, Seven, Nine], [Five, Eight, Nine],
    [Six, Seven, Ten], [Six, Eight, Ten], [Six, Nine, Ten],
];

/// Four to an inside straight with four high cards.
pub const INSIDE_STRAIGHT_FOUR_HIGH_CARDS: &[[Rank; 4]] = &[[Ace, Jack, Queen, King]];

/// Four to an inside straight with three high cards.
#[rustfmt::skip]
pub const INSIDE_STRAIGHT_THREE_HIGH_CARDS: &[[Rank; 4]] = &[
    [Nine, Jack, Queen, King], [Ace, Ten, Jack, Queen],
    [Ace, Ten, Jack, King], [Ace, Ten, Queen, King],
];

/// The three cards straight flush draws, from the strongest to the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StraightFlushKind {
    /// Open or near open draws.
    Type1,
    /// One gap draws, see [THREE_TO_STRAIGHT_FLUSH_TYPE2].
    Type2,
    /// Double inside draws.
    Type3,
}

impl StraightFlushKind {
    /// The rank shapes of this kind of draw.
    pub fn shapes(self) -> &'static [[Rank; 3]] {
        match self {
            StraightFlushKind::Type1 => THREE_TO_STRAIGHT_FLUSH_TYPE1,
            StraightFlushKind::Type2 => THREE_TO_STRAIGHT_FLUSH_TYPE2,
            StraightFlushKind::Type3 => THREE_TO_STRAIGHT_FLUSH_TYPE3,
        }
    }
}

/// The number of high cards in a four cards inside straight draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighCards {
    /// Three high cards.
    Three,
    /// Four high cards.
    Four,
}

impl HighCards {
    /// The rank shapes of inside straights with this number of high cards.
    pub fn shapes(self) -> &'static [[Rank; 4]] {
        match self {
            HighCards::Three => INSIDE_STRAIGHT_THREE_HIGH_CARDS,
            HighCards::Four => INSIDE_STRAIGHT_FOUR_HIGH_CARDS,
        }
    }
}

/// Finds the shape listing exactly the ranks of an N cards selection.
///
/// `counts` must count exactly N cards, with N distinct ranks having all
/// the N ranks of a shape means having no other rank.
pub fn find_shape<const N: usize>(
    shapes: &'static [[Rank; N]],
    counts: &RankCounts,
) -> Option<&'static [Rank; N]> {
    debug_assert_eq!(counts.total(), N);
    shapes.iter().find(|shape| counts.has_all(&shape[..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use vpoker_cards::combos::for_each_ksubset;

    type RankSet = u16;

    fn rank_set(ranks: &[Rank]) -> RankSet {
        ranks.iter().fold(0, |set, r| set | (1 << r.index()))
    }

    fn table_sets<const N: usize>(table: &[[Rank; N]]) -> HashSet<RankSet> {
        let sets = table.iter().map(|s| rank_set(s)).collect::<HashSet<_>>();
        assert_eq!(sets.len(), table.len(), "duplicate shapes");
        sets
    }

    // All the n ranks sets a predicate accepts.
    fn generate(n: usize, f: impl Fn(&[Rank]) -> bool) -> HashSet<RankSet> {
        let mut sets = HashSet::default();
        for_each_ksubset(Rank::COUNT, n, |idx| {
            let ranks = idx
                .iter()
                .map(|&i| Rank::from_index(i as u8).unwrap())
                .collect::<Vec<_>>();
            if f(&ranks) {
                sets.insert(rank_set(&ranks));
            }
        });
        sets
    }

    const ROYAL: [Rank; 5] = [Ten, Jack, Queen, King, Ace];

    fn is_royal_draw(ranks: &[Rank]) -> bool {
        ranks.iter().all(|r| ROYAL.contains(r))
    }

    // The five ranks windows of a straight flush, ace low, without the royal.
    fn in_low_window(ranks: &[Rank]) -> bool {
        let set = rank_set(ranks);
        (0..=8).any(|low| set & !(0b11111 << low) == 0)
    }

    fn is_straight(set: RankSet) -> bool {
        let royal = rank_set(&ROYAL);
        set == royal || (0..=8).any(|low| set == 0b11111 << low)
    }

    // Number of ranks that complete a straight from four distinct ranks.
    fn straight_outs(ranks: &[Rank]) -> usize {
        let set = rank_set(ranks);
        Rank::ranks()
            .filter(|r| set & (1 << r.index()) == 0)
            .filter(|r| is_straight(set | (1 << r.index())))
            .count()
    }

    fn high_cards(ranks: &[Rank]) -> usize {
        ranks.iter().filter(|r| r.is_high()).count()
    }

    // Gaps between the lowest and highest rank, ace low.
    fn gaps(ranks: &[Rank]) -> usize {
        let lo = ranks.iter().map(|r| r.index()).min().unwrap();
        let hi = ranks.iter().map(|r| r.index()).max().unwrap();
        hi - lo + 1 - ranks.len()
    }

    fn is_three_sf(ranks: &[Rank]) -> bool {
        !is_royal_draw(ranks) && in_low_window(ranks)
    }

    fn three_sf_kind(ranks: &[Rank]) -> StraightFlushKind {
        let (hc, gaps) = (high_cards(ranks), gaps(ranks));
        if ranks.contains(&Ace) || rank_set(ranks) == rank_set(&[Deuce, Trey, Four]) {
            StraightFlushKind::Type2
        } else if hc >= gaps {
            StraightFlushKind::Type1
        } else if gaps - hc == 1 {
            StraightFlushKind::Type2
        } else {
            StraightFlushKind::Type3
        }
    }

    #[test]
    fn royal_flush_shapes() {
        assert_eq!(table_sets(FOUR_TO_ROYAL_FLUSH), generate(4, is_royal_draw));
        assert_eq!(table_sets(THREE_TO_ROYAL_FLUSH), generate(3, is_royal_draw));
    }

    #[test]
    fn four_to_straight_flush_shapes() {
        let expected = generate(4, |r| in_low_window(r) && !is_royal_draw(r));
        assert_eq!(table_sets(FOUR_TO_STRAIGHT_FLUSH), expected);
        assert_eq!(expected.len(), 36);
    }

    #[test]
    fn three_to_straight_flush_shapes() {
        for kind in [
            StraightFlushKind::Type1,
            StraightFlushKind::Type2,
            StraightFlushKind::Type3,
        ] {
            let expected = generate(3, |r| is_three_sf(r) && three_sf_kind(r) == kind);
            assert_eq!(table_sets(kind.shapes()), expected, "{kind:?}");
        }

        // The three kinds cover all the non royal draws.
        let all = generate(3, is_three_sf);
        assert_eq!(all.len(), 14 + 25 + 15);
    }

    #[test]
    fn spread_five_shapes() {
        let expected = generate(3, |r| {
            is_three_sf(r)
                && three_sf_kind(r) == StraightFlushKind::Type2
                && gaps(r) == 2
                && high_cards(r) == 1
        });
        assert_eq!(table_sets(SPREAD_FIVE_ONE_HIGH_CARD), expected);

        let type2 = table_sets(THREE_TO_STRAIGHT_FLUSH_TYPE2);
        assert!(table_sets(SPREAD_FIVE_ONE_HIGH_CARD).is_subset(&type2));
    }

    #[test]
    fn inside_straight_shapes() {
        for (hc, target) in [(3, HighCards::Three), (4, HighCards::Four)] {
            let expected = generate(4, |r| straight_outs(r) == 1 && high_cards(r) == hc);
            assert_eq!(table_sets(target.shapes()), expected, "{target:?}");
        }
    }

    #[test]
    fn find_shapes() {
        let counts = RankCounts::new(&vpoker_cards::parse_cards("Kh Ts 9d").unwrap());
        assert_eq!(
            find_shape(THREE_TO_STRAIGHT_FLUSH_TYPE2, &counts),
            Some(&[Nine, Ten, King])
        );
        assert_eq!(find_shape(THREE_TO_STRAIGHT_FLUSH_TYPE1, &counts), None);

        // A pair never matches a shape.
        let counts = RankCounts::new(&vpoker_cards::parse_cards("9h 9s Td").unwrap());
        assert_eq!(find_shape(THREE_TO_STRAIGHT_FLUSH_TYPE1, &counts), None);
    }
}
