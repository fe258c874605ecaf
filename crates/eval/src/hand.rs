// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Dealt hands classification and sub-selection catalogs.
use std::{cell::OnceCell, fmt, str::FromStr};
use vpoker_cards::{
    Card, Rank,
    combos::{for_each_ksubset, nck},
    parse_cards,
};

use crate::{
    Error, HAND_SIZE, HandScore, HoldMask, RankCounts, Result,
    shapes::{HighCards, StraightFlushKind},
    subhand::{RoyalDraw, StraightFlushDraw, Subhand, SuitedDraw},
};

const ROYAL_RANKS: [Rank; 5] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// A five cards dealt hand.
///
/// Card positions are significant, a [HoldMask] flags the positions to keep
/// on the draw. The sub-selections of one to four cards are built the first
/// time they are needed and cached for the hand lifetime.
#[derive(Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    counts: RankCounts,
    subhands: [OnceCell<Vec<Subhand>>; Subhand::MAX_SIZE],
}

impl Hand {
    /// Creates a hand from five distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| Error::HandSize(cards.len()))?;

        for (idx, card) in cards.iter().enumerate() {
            if cards[..idx].contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
        }

        Ok(Self {
            cards,
            counts: RankCounts::new(&cards),
            subhands: Default::default(),
        })
    }

    /// The hand cards in dealt order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// The hand rank counts.
    pub fn counts(&self) -> &RankCounts {
        &self.counts
    }

    /// Returns the sub-selections with `size` cards.
    ///
    /// The catalog holds the combinations of card positions in lexicographic
    /// order, there are 5 subhands of size 1 and 4 and 10 of size 2 and 3.
    ///
    /// Panics if size is not 1 <= size <= 4.
    pub fn subhands(&self, size: usize) -> &[Subhand] {
        assert!(
            (1..=Subhand::MAX_SIZE).contains(&size),
            "Subhand size must be 1 to 4, got {size}"
        );

        self.subhands[size - 1].get_or_init(|| {
            let mut catalog = Vec::with_capacity(nck(HAND_SIZE, size));
            for_each_ksubset(HAND_SIZE, size, |positions| {
                catalog.push(Subhand::from_positions(&self.cards, positions));
            });
            catalog
        })
    }

    /// Returns the hand category.
    pub fn classify(&self) -> HandScore {
        let flush = self.is_flush();
        let straight = self.is_straight();

        if flush && straight {
            if self.is_royal_flush() {
                HandScore::RoyalFlush
            } else {
                HandScore::StraightFlush
            }
        } else if flush {
            HandScore::Flush
        } else if straight {
            HandScore::Straight
        } else if self.counts.is_four_of_a_kind() {
            HandScore::FourOfAKind
        } else if self.counts.is_full_house() {
            HandScore::FullHouse
        } else if self.counts.is_three_of_a_kind() {
            HandScore::ThreeOfAKind
        } else if self.counts.is_two_pair() {
            HandScore::TwoPair
        } else if self.counts.is_jacks_or_better() {
            HandScore::JacksOrBetter
        } else {
            HandScore::None
        }
    }

    /// Checks if all cards have the same suit.
    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit();
        self.cards.iter().all(|c| c.suit() == suit)
    }

    /// Checks if the cards ranks are in sequence, the ace plays low or high.
    pub fn is_straight(&self) -> bool {
        let mut ranks = self.cards.map(|c| c.rank().index());
        ranks.sort_unstable();

        if self.counts.has_all(&ROYAL_RANKS) {
            return true;
        }

        let lowest = ranks[0];
        (1..HAND_SIZE).all(|i| ranks[i] == lowest + i)
    }

    /// Checks for a ten, jack, queen, king and ace of the same suit.
    pub fn is_royal_flush(&self) -> bool {
        self.is_flush() && self.counts.has_all(&ROYAL_RANKS)
    }

    /// Checks for four cards of the same rank.
    pub fn is_four_of_a_kind(&self) -> bool {
        self.counts.is_four_of_a_kind()
    }

    /// Checks for a three of a kind and a pair.
    pub fn is_full_house(&self) -> bool {
        self.counts.is_full_house()
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

    /// Returns the positions of the three cards of the same rank.
    pub fn three_of_a_kind(&self) -> Option<HoldMask> {
        self.find_holds(3, Subhand::is_three_of_a_kind)
    }

    /// Returns the positions of the two pairs.
    pub fn two_pair(&self) -> Option<HoldMask> {
        self.find_holds(4, Subhand::is_two_pair)
    }

    /// Returns the positions of the jacks or better pair.
    pub fn jacks_or_better(&self) -> Option<HoldMask> {
        self.find_holds(2, Subhand::is_jacks_or_better)
    }

    /// Returns the positions of the low pair.
    pub fn low_pair(&self) -> Option<HoldMask> {
        self.find_holds(2, Subhand::is_low_pair)
    }

    /// Returns the four cards royal flush draw.
    pub fn four_to_royal_flush(&self) -> Option<RoyalDraw> {
        self.find(4, Subhand::royal_flush_draw)
    }

    /// Returns the three cards royal flush draw.
    pub fn three_to_royal_flush(&self) -> Option<RoyalDraw> {
        self.find(3, Subhand::royal_flush_draw)
    }

    /// Returns the positions of the four cards straight flush draw.
    pub fn four_to_straight_flush(&self) -> Option<HoldMask> {
        self.find_holds(4, Subhand::is_four_to_straight_flush)
    }

    /// Returns the three cards straight flush draw of the given kind.
    pub fn three_to_straight_flush(&self, kind: StraightFlushKind) -> Option<StraightFlushDraw> {
        self.find(3, |sh| sh.three_to_straight_flush(kind))
    }

    /// Returns the four cards flush draw.
    pub fn four_to_flush(&self) -> Option<SuitedDraw> {
        self.find(4, |sh| {
            sh.is_all_same_suit().then(|| SuitedDraw {
                holds: sh.holds(),
                suit: sh.cards()[0].suit(),
            })
        })
    }

    /// Returns the positions of an unsuited ten, jack, queen and king.
    pub fn unsuited_tjqk(&self) -> Option<HoldMask> {
        self.find_holds(4, Subhand::is_unsuited_tjqk)
    }

    /// Returns the positions of the cards with exactly the given ranks.
    ///
    /// Panics if `ranks` does not have one to four ranks.
    pub fn unsuited_ranks(&self, ranks: &[Rank]) -> Option<HoldMask> {
        self.find_holds(ranks.len(), |sh| sh.is_unsuited_ranks(ranks))
    }

    /// Returns the two cards of the given ranks if they have the same suit.
    pub fn suited_ranks(&self, r1: Rank, r2: Rank) -> Option<SuitedDraw> {
        self.find(2, |sh| {
            sh.suited_ranks(r1, r2).map(|suit| SuitedDraw {
                holds: sh.holds(),
                suit,
            })
        })
    }

    /// Returns the position of the first card with the given rank.
    pub fn single_rank(&self, rank: Rank) -> Option<HoldMask> {
        self.find_holds(1, |sh| sh.is_single_rank(rank))
    }

    /// Returns the positions of the four cards inside straight draw.
    pub fn four_to_inside_straight(&self, high_cards: HighCards) -> Option<HoldMask> {
        self.find_holds(4, |sh| sh.is_four_to_inside_straight(high_cards))
    }

    /// Returns the positions of the four cards outside straight draw.
    pub fn four_to_outside_straight(&self) -> Option<HoldMask> {
        self.find_holds(4, Subhand::is_four_to_outside_straight)
    }

    fn find<T, F>(&self, size: usize, f: F) -> Option<T>
    where
        F: FnMut(&Subhand) -> Option<T>,
    {
        self.subhands(size).iter().find_map(f)
    }

    fn find_holds<F>(&self, size: usize, f: F) -> Option<HoldMask>
    where
        F: Fn(&Subhand) -> bool,
    {
        self.find(size, |sh| f(sh).then(|| sh.holds()))
    }
}

impl FromStr for Hand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Hand::new(&parse_cards(s)?)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3, c4, c5] = self.cards;
        write!(f, "{c1} {c2} {c3} {c4} {c5}")
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({self})")
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Hand {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashMap;
    use vpoker_cards::{Deck, Suit};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn hand_new() {
        let h = hand("Ah Kd Tc 2s 9h");
        assert_eq!(h.to_string(), "Ah Kd Tc 2s 9h");
        assert_eq!(h.cards()[2], Card::new(Rank::Ten, Suit::Clubs));
        assert_eq!(h.counts().total(), 5);

        assert_eq!("Ah Kd Tc 2s".parse::<Hand>(), Err(Error::HandSize(4)));
        assert_eq!("Ah Kd Tc 2s 9h 8h".parse::<Hand>(), Err(Error::HandSize(6)));
        assert_eq!(
            "Ah Kd Tc 2s Kd".parse::<Hand>(),
            Err(Error::DuplicateCard(Card::new(Rank::King, Suit::Diamonds)))
        );
        let invalid = "Ah Kd Tc 2s 1d".parse::<Hand>();
        assert!(matches!(invalid, Err(Error::Card(_))));
    }

    #[test]
    fn classify_examples() {
        let cases = [
            ("Th Jh Qh Kh Ah", HandScore::RoyalFlush),
            ("Ah Kh Jh Qh Th", HandScore::RoyalFlush),
            ("9s Ts Js Qs Ks", HandScore::StraightFlush),
            ("As 2s 3s 4s 5s", HandScore::StraightFlush),
            ("7c 7d 7h 7s 2d", HandScore::FourOfAKind),
            ("7c 7d 7h 2s 2d", HandScore::FullHouse),
            ("2c 7c 9c Jc Kc", HandScore::Flush),
            ("Ts Jd Qh Kc Ad", HandScore::Straight),
            ("Ad 2s 3h 4c 5d", HandScore::Straight),
            ("5d 6s 7h 8c 9d", HandScore::Straight),
            ("7c 7d 7h Ks 2d", HandScore::ThreeOfAKind),
            ("7c 7d Kh Ks 2d", HandScore::TwoPair),
            ("Jc Jd 7h 8s 2d", HandScore::JacksOrBetter),
            ("Tc Td 7h 8s 2d", HandScore::None),
            ("Jc Qd Kh As 2d", HandScore::None),
            ("Qs Kd Ah 2c 3c", HandScore::None),
        ];

        for (cards, score) in cases {
            assert_eq!(hand(cards).classify(), score, "{cards}");
        }
    }

    #[test]
    fn is_predicates() {
        assert!(hand("Ts Jd Qh Kc Ad").is_straight());
        assert!(!hand("Js Qd Kh Ac 2d").is_straight());
        assert!(!hand("Ts Td Qh Kc Ad").is_straight());

        assert!(hand("2c 7c 9c Jc Kc").is_flush());
        assert!(!hand("2c 7c 9c Jc Kd").is_flush());
        assert!(!hand("9h Th Jh Qh Kh").is_royal_flush());

        assert!(hand("Tc Td 7h 8s 2d").is_low_pair());
        assert!(!hand("Tc Td 7h 8s 2d").is_jacks_or_better());
        assert!(hand("Qc Qd 9h 9s 2d").is_two_pair());
        assert!(hand("Qc Qd Qh 9s 9d").is_full_house());
        assert!(hand("Qc Qd Qh 9s 9d").is_three_of_a_kind());
        assert!(hand("Qc Qd Qh Qs 9d").is_four_of_a_kind());
    }

    #[test]
    fn classify_reorder() {
        let mut cards = parse_cards("7c 7d Kh Ks 2d").unwrap();
        let score = Hand::new(&cards).unwrap().classify();

        for _ in 0..5 {
            cards.rotate_left(1);
            assert_eq!(Hand::new(&cards).unwrap().classify(), score);
        }

        cards.reverse();
        assert_eq!(Hand::new(&cards).unwrap().classify(), score);
    }

    #[test]
    fn classify_all_hands() {
        let mut histogram = HashMap::<HandScore, usize>::default();
        Deck::default().for_each(5, |cards| {
            let h = Hand::new(cards).unwrap();
            *histogram.entry(h.classify()).or_default() += 1;
        });

        let expected = [
            (HandScore::RoyalFlush, 4),
            (HandScore::StraightFlush, 36),
            (HandScore::FourOfAKind, 624),
            (HandScore::FullHouse, 3_744),
            (HandScore::Flush, 5_108),
            (HandScore::Straight, 10_200),
            (HandScore::ThreeOfAKind, 54_912),
            (HandScore::TwoPair, 123_552),
            (HandScore::JacksOrBetter, 337_920),
            (HandScore::None, 2_062_860),
        ];

        for (score, count) in expected {
            assert_eq!(histogram.get(&score), Some(&count), "{score}");
        }

        assert_eq!(histogram.values().sum::<usize>(), 2_598_960);
    }

    #[test]
    fn subhands_catalogs() {
        let h = hand("Ah Kd Tc 2s 9h");

        for (size, count) in [(1, 5), (2, 10), (3, 10), (4, 5)] {
            let catalog = h.subhands(size);
            assert_eq!(catalog.len(), count);

            for sh in catalog {
                assert_eq!(sh.size(), size);
                assert_eq!(sh.holds().count(), size);

                let dealt = sh
                    .holds()
                    .positions()
                    .map(|p| h.cards()[p])
                    .collect::<Vec<_>>();
                assert_eq!(sh.cards(), &dealt[..]);
            }
        }

        let masks = h
            .subhands(4)
            .iter()
            .map(|sh| sh.holds().to_string())
            .collect::<Vec<_>>();
        assert_eq!(masks, ["1234", "1235", "1245", "1345", "2345"]);

        let masks = h
            .subhands(2)
            .iter()
            .take(4)
            .map(|sh| sh.holds().to_string())
            .collect::<Vec<_>>();
        assert_eq!(masks, ["12", "13", "14", "15"]);

        // Cached catalogs are returned on following calls.
        assert!(std::ptr::eq(h.subhands(3), h.subhands(3)));
    }

    #[test]
    #[should_panic]
    fn subhands_size() {
        hand("Ah Kd Tc 2s 9h").subhands(5);
    }

    fn mask(holds: Option<HoldMask>) -> Option<String> {
        holds.map(|m| m.to_string())
    }

    #[test]
    fn get_queries() {
        let h = hand("7c Kh 7d Ks 2d");
        assert_eq!(mask(h.two_pair()), Some("1234".into()));
        assert_eq!(h.three_of_a_kind(), None);

        let h = hand("Jc 9d 7h Js 2d");
        assert_eq!(mask(h.jacks_or_better()), Some("14".into()));
        assert_eq!(h.low_pair(), None);

        let h = hand("7c 9d 7h 2s 7d");
        assert_eq!(mask(h.three_of_a_kind()), Some("135".into()));

        let h = hand("Th 2c Jh Qh Kh");
        let draw = h.four_to_royal_flush().unwrap();
        assert_eq!(draw.holds.to_string(), "1345");
        assert_eq!(draw.suit, Suit::Hearts);

        let h = hand("Ts 2c Qs As 8d");
        let draw = h.three_to_royal_flush().unwrap();
        assert_eq!(draw.holds.to_string(), "134");
        assert_eq!(draw.ten_ace, Some(Rank::Queen));

        let h = hand("5c 6c 2d 7c 8c");
        assert_eq!(mask(h.four_to_straight_flush()), Some("1245".into()));

        let h = hand("2c 6c Kd 9c Jc");
        let draw = h.four_to_flush().unwrap();
        assert_eq!(draw.holds.to_string(), "1245");
        assert_eq!(draw.suit, Suit::Clubs);

        let h = hand("Ts 3c Jd Qh Kc");
        assert_eq!(mask(h.unsuited_tjqk()), Some("1345".into()));

        let h = hand("Kd 2c Jd 5h 8s");
        let draw = h.suited_ranks(Rank::Jack, Rank::King).unwrap();
        assert_eq!(draw.holds.to_string(), "13");
        assert_eq!(draw.suit, Suit::Diamonds);

        let unsuited = h.unsuited_ranks(&[Rank::King, Rank::Jack]);
        assert_eq!(mask(unsuited), Some("13".into()));
        assert_eq!(mask(h.single_rank(Rank::Jack)), Some("3".into()));
        assert_eq!(h.single_rank(Rank::Queen), None);

        let h = hand("Ac 4d Jd Qh Ks");
        let inside = h.four_to_inside_straight(HighCards::Four);
        assert_eq!(mask(inside), Some("1345".into()));

        let h = hand("5c Kd 6d 7h 8s");
        assert_eq!(mask(h.four_to_outside_straight()), Some("1345".into()));
    }
}
