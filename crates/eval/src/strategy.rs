// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks or Better hold strategy.
//!
//! Made hands are kept or broken for a stronger draw, everything else goes
//! through a fixed priority cascade of draws. Six cascade steps compare two
//! draws that can be dealt together and pick one with a tie-break rule.
use std::fmt;
use vpoker_cards::{
    Rank::{self, Ace, Jack, King, Nine, Queen, Ten},
    Suit,
};

use crate::{
    Hand, HandScore, HoldMask,
    shapes::{HighCards, StraightFlushKind},
    subhand::{RoyalDraw, StraightFlushDraw, SuitedDraw},
};

/// A holdable quality of a dealt hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    /// Four cards to a royal flush.
    FourToRoyalFlush,
    /// Four cards to a straight flush.
    FourToStraightFlush,
    /// Three cards to a royal flush.
    ThreeToRoyalFlush,
    /// Four cards of the same suit.
    FourToFlush,
    /// Ten, jack, queen and king of any suits.
    UnsuitedTjqk,
    /// A pair of deuces through tens.
    LowPair,
    /// Four ranks in sequence open at both ends.
    FourToOutsideStraight,
    /// Three cards to a straight flush of the given kind.
    ThreeToStraightFlush(StraightFlushKind),
    /// Four cards to an inside straight.
    FourToInsideStraight(HighCards),
    /// Two ranks of the same suit.
    Suited(Rank, Rank),
    /// The given ranks of any suits.
    Unsuited(&'static [Rank]),
    /// A single card.
    Single(Rank),
}

impl Quality {
    /// Looks up the first sub-selection of the hand with this quality.
    pub fn find(self, hand: &Hand) -> Option<Draw> {
        match self {
            Quality::FourToRoyalFlush => hand.four_to_royal_flush().map(Draw::Royal),
            Quality::FourToStraightFlush => hand.four_to_straight_flush().map(Draw::Cards),
            Quality::ThreeToRoyalFlush => hand.three_to_royal_flush().map(Draw::Royal),
            Quality::FourToFlush => hand.four_to_flush().map(Draw::Suited),
            Quality::UnsuitedTjqk => hand.unsuited_tjqk().map(Draw::Cards),
            Quality::LowPair => hand.low_pair().map(Draw::Cards),
            Quality::FourToOutsideStraight => hand.four_to_outside_straight().map(Draw::Cards),
            Quality::ThreeToStraightFlush(kind) => {
                hand.three_to_straight_flush(kind).map(Draw::StraightFlush)
            }
            Quality::FourToInsideStraight(high_cards) => {
                hand.four_to_inside_straight(high_cards).map(Draw::Cards)
            }
            Quality::Suited(r1, r2) => hand.suited_ranks(r1, r2).map(Draw::Suited),
            Quality::Unsuited(ranks) => hand.unsuited_ranks(ranks).map(Draw::Cards),
            Quality::Single(rank) => hand.single_rank(rank).map(Draw::Cards),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::FourToRoyalFlush => write!(f, "4 to a royal flush"),
            Quality::FourToStraightFlush => write!(f, "4 to a straight flush"),
            Quality::ThreeToRoyalFlush => write!(f, "3 to a royal flush"),
            Quality::FourToFlush => write!(f, "4 to a flush"),
            Quality::UnsuitedTjqk => write!(f, "Unsuited TJQK"),
            Quality::LowPair => write!(f, "Low pair"),
            Quality::FourToOutsideStraight => write!(f, "4 to an outside straight"),
            Quality::ThreeToStraightFlush(kind) => {
                let n = match kind {
                    StraightFlushKind::Type1 => 1,
                    StraightFlushKind::Type2 => 2,
                    StraightFlushKind::Type3 => 3,
                };
                write!(f, "3 to a straight flush (type {n})")
            }
            Quality::FourToInsideStraight(high_cards) => {
                let n = match high_cards {
                    HighCards::Three => 3,
                    HighCards::Four => 4,
                };
                write!(f, "4 to an inside straight with {n} high cards")
            }
            Quality::Suited(r1, r2) => write!(f, "Suited {r1}{r2}"),
            Quality::Unsuited(ranks) => {
                write!(f, "Unsuited ")?;
                ranks.iter().try_for_each(|r| write!(f, "{r}"))
            }
            Quality::Single(rank) => write!(f, "Single {rank}"),
        }
    }
}

/// The sub-selection found for a quality, with the values tie-breaks need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Plain positions.
    Cards(HoldMask),
    /// A royal flush draw.
    Royal(RoyalDraw),
    /// A three cards straight flush draw.
    StraightFlush(StraightFlushDraw),
    /// Same suit cards.
    Suited(SuitedDraw),
}

impl Draw {
    /// The positions to hold.
    pub fn holds(&self) -> HoldMask {
        match self {
            Draw::Cards(holds) => *holds,
            Draw::Royal(draw) => draw.holds,
            Draw::StraightFlush(draw) => draw.holds,
            Draw::Suited(draw) => draw.holds,
        }
    }

    fn suit(&self) -> Option<Suit> {
        match self {
            Draw::Cards(_) => None,
            Draw::Royal(draw) => Some(draw.suit),
            Draw::StraightFlush(draw) => Some(draw.suit),
            Draw::Suited(draw) => Some(draw.suit),
        }
    }
}

/// Why a hold was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    /// A made hand, possibly broken for a stronger draw.
    Made {
        /// The dealt hand category.
        score: HandScore,
        /// The draw held instead of the made hand.
        draw: Option<Quality>,
    },
    /// A cascade draw.
    Draw(Quality),
    /// An exception tie-break between two dealt draws.
    Exception {
        /// The exception label.
        label: char,
        /// The held draw.
        kept: Quality,
        /// The discarded draw.
        over: Quality,
    },
    /// Nothing worth holding.
    Garbage,
}

impl fmt::Display for Play {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Play::Made { score, draw: None } => write!(f, "{score}"),
            Play::Made {
                score,
                draw: Some(draw),
            } => write!(f, "{draw} over {score}"),
            Play::Draw(quality) => write!(f, "{quality}"),
            Play::Exception { label, kept, over } => {
                write!(f, "{kept} over {over} (exception {label})")
            }
            Play::Garbage => write!(f, "Discard all"),
        }
    }
}

/// A hold decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// The positions to hold.
    pub holds: HoldMask,
    /// The rule that produced the holds.
    pub play: Play,
}

/// Decides which cards should be held.
pub fn decide(hand: &Hand) -> Decision {
    let score = hand.classify();
    if score != HandScore::None {
        return made_hand(hand, score);
    }

    for step in CASCADE {
        if let Some(decision) = step.resolve(hand) {
            log::trace!("{hand}: hold {} for {}", decision.holds, decision.play);
            return decision;
        }
    }

    log::trace!("{hand}: discard all");
    Decision {
        holds: HoldMask::NONE,
        play: Play::Garbage,
    }
}

/// Returns the positions that should be held.
pub fn hold(hand: &Hand) -> HoldMask {
    decide(hand).holds
}

fn made_hand(hand: &Hand, score: HandScore) -> Decision {
    let made = |holds| Decision {
        holds,
        play: Play::Made { score, draw: None },
    };

    let broken = |draw: Draw, quality| Decision {
        holds: draw.holds(),
        play: Play::Made {
            score,
            draw: Some(quality),
        },
    };

    let royal_draw = || Quality::FourToRoyalFlush.find(hand);

    match score {
        HandScore::RoyalFlush
        | HandScore::StraightFlush
        | HandScore::FourOfAKind
        | HandScore::FullHouse => made(HoldMask::ALL),
        HandScore::Flush | HandScore::Straight => match royal_draw() {
            Some(draw) => broken(draw, Quality::FourToRoyalFlush),
            None => made(HoldMask::ALL),
        },
        HandScore::ThreeOfAKind => made(lookup(hand, score, Hand::three_of_a_kind)),
        HandScore::TwoPair => made(lookup(hand, score, Hand::two_pair)),
        HandScore::JacksOrBetter => {
            if let Some(draw) = royal_draw() {
                broken(draw, Quality::FourToRoyalFlush)
            } else if let Some(draw) = Quality::FourToStraightFlush.find(hand) {
                broken(draw, Quality::FourToStraightFlush)
            } else {
                made(lookup(hand, score, Hand::jacks_or_better))
            }
        }
        HandScore::None => unreachable!("Made hand expected for {hand}"),
    }
}

fn lookup(hand: &Hand, score: HandScore, f: fn(&Hand) -> Option<HoldMask>) -> HoldMask {
    let Some(holds) = f(hand) else {
        panic!("{score} lookup failed for {hand}");
    };

    holds
}

/// A tie-break rule, returns true if the competing draw should be held or
/// `None` if the rule does not apply to the dealt draws.
type TieBreak = fn(&Hand, &Draw, &Draw) -> Option<bool>;

/// Two draws that can be dealt together and the rule to choose between them.
struct Exception {
    label: char,
    primary: Quality,
    competing: Quality,
    prefer_competing: TieBreak,
}

impl Exception {
    fn resolve(&self, hand: &Hand) -> Option<Decision> {
        let draw = |quality: Quality, found: Draw| Decision {
            holds: found.holds(),
            play: Play::Draw(quality),
        };

        let (primary, competing) = match (self.primary.find(hand), self.competing.find(hand)) {
            (Some(primary), Some(competing)) => (primary, competing),
            (Some(primary), None) => return Some(draw(self.primary, primary)),
            (None, Some(competing)) => return Some(draw(self.competing, competing)),
            (None, None) => return None,
        };

        let Some(prefer_competing) = (self.prefer_competing)(hand, &primary, &competing) else {
            return Some(draw(self.primary, primary));
        };

        let (kept, over, holds) = if prefer_competing {
            (self.competing, self.primary, competing.holds())
        } else {
            (self.primary, self.competing, primary.holds())
        };

        log::debug!("{hand}: exception {} holds {kept} over {over}", self.label);

        Some(Decision {
            holds,
            play: Play::Exception {
                label: self.label,
                kept,
                over,
            },
        })
    }
}

enum Step {
    Hold(Quality),
    Exception(Exception),
}

impl Step {
    fn resolve(&self, hand: &Hand) -> Option<Decision> {
        match self {
            Step::Hold(quality) => quality.find(hand).map(|draw| Decision {
                holds: draw.holds(),
                play: Play::Draw(*quality),
            }),
            Step::Exception(exception) => exception.resolve(hand),
        }
    }
}

/// The draws cascade for hands with no paying category, strongest first.
static CASCADE: &[Step] = &[
    Step::Hold(Quality::FourToRoyalFlush),
    Step::Hold(Quality::FourToStraightFlush),
    Step::Exception(Exception {
        label: 'A',
        primary: Quality::ThreeToRoyalFlush,
        competing: Quality::FourToFlush,
        prefer_competing: flush_over_ten_ace_royal,
    }),
    Step::Hold(Quality::UnsuitedTjqk),
    Step::Hold(Quality::LowPair),
    Step::Hold(Quality::FourToOutsideStraight),
    Step::Hold(Quality::ThreeToStraightFlush(StraightFlushKind::Type1)),
    Step::Exception(Exception {
        label: 'B',
        primary: Quality::Suited(Queen, Jack),
        competing: Quality::FourToInsideStraight(HighCards::Four),
        prefer_competing: nine_or_flush_penalty,
    }),
    Step::Hold(Quality::Suited(King, Queen)),
    Step::Hold(Quality::Suited(King, Jack)),
    Step::Hold(Quality::Suited(Ace, King)),
    Step::Hold(Quality::Suited(Ace, Queen)),
    Step::Hold(Quality::Suited(Ace, Jack)),
    Step::Exception(Exception {
        label: 'C',
        primary: Quality::ThreeToStraightFlush(StraightFlushKind::Type2),
        competing: Quality::FourToInsideStraight(HighCards::Three),
        prefer_competing: inside_straight_over_spread,
    }),
    Step::Hold(Quality::Unsuited(&[Jack, Queen, King])),
    Step::Hold(Quality::Unsuited(&[Jack, Queen])),
    Step::Exception(Exception {
        label: 'D',
        primary: Quality::Suited(Ten, Jack),
        competing: Quality::Unsuited(&[Jack, King]),
        prefer_competing: flush_penalty,
    }),
    Step::Hold(Quality::Unsuited(&[Queen, King])),
    Step::Exception(Exception {
        label: 'E',
        primary: Quality::Suited(Ten, Queen),
        competing: Quality::Unsuited(&[Queen, Ace]),
        prefer_competing: flush_penalty,
    }),
    Step::Hold(Quality::Unsuited(&[King, Ace])),
    Step::Hold(Quality::Unsuited(&[Jack, Ace])),
    Step::Hold(Quality::Single(Jack)),
    Step::Exception(Exception {
        label: 'F',
        primary: Quality::Suited(Ten, King),
        competing: Quality::Single(King),
        prefer_competing: nine_and_flush_penalty,
    }),
    Step::Hold(Quality::Single(Queen)),
    Step::Hold(Quality::Single(King)),
    Step::Hold(Quality::Single(Ace)),
    Step::Hold(Quality::ThreeToStraightFlush(StraightFlushKind::Type3)),
];

/// A 4 to a flush beats a ten-ace 3 to a royal flush when the off suit card
/// is a straight penalty: a ten, or a jack, queen or king other than the
/// third royal rank.
fn flush_over_ten_ace_royal(hand: &Hand, primary: &Draw, competing: &Draw) -> Option<bool> {
    let Draw::Royal(royal) = primary else {
        panic!("Royal flush draw expected, got {primary:?}");
    };

    let third = royal.ten_ace?;

    let Draw::Suited(flush) = competing else {
        panic!("Flush draw expected, got {competing:?}");
    };

    let mut off_suit = hand.cards().iter().filter(|c| c.suit() != flush.suit);
    let (Some(card), None) = (off_suit.next(), off_suit.next()) else {
        panic!("4 to a flush must leave exactly one off suit card in {hand}");
    };

    let penalty = match card.rank() {
        Ten => true,
        rank @ (Jack | Queen | King) => rank != third,
        _ => false,
    };

    Some(penalty)
}

/// Checks for a card of the draw suit that is not held by the draw.
fn has_flush_penalty(hand: &Hand, draw: &Draw) -> bool {
    let Some(suit) = draw.suit() else {
        panic!("Suited draw expected, got {draw:?}");
    };

    let holds = draw.holds();
    holds.discards().any(|pos| hand.cards()[pos].suit() == suit)
}

fn flush_penalty(hand: &Hand, primary: &Draw, _: &Draw) -> Option<bool> {
    Some(has_flush_penalty(hand, primary))
}

fn nine_or_flush_penalty(hand: &Hand, primary: &Draw, _: &Draw) -> Option<bool> {
    let nine = hand.counts().has(Nine);
    Some(nine || has_flush_penalty(hand, primary))
}

fn nine_and_flush_penalty(hand: &Hand, primary: &Draw, _: &Draw) -> Option<bool> {
    let nine = hand.counts().has(Nine);
    Some(nine && has_flush_penalty(hand, primary))
}

/// An inside straight with three high cards beats a spread straight flush
/// draw when a discarded card would fill one of the draw gaps.
fn inside_straight_over_spread(hand: &Hand, primary: &Draw, _: &Draw) -> Option<bool> {
    let Draw::StraightFlush(draw) = primary else {
        panic!("Straight flush draw expected, got {primary:?}");
    };

    let spread = draw.spread?;
    let fills_gap = |pos: usize| spread.fills_gap(hand.cards()[pos].rank());
    Some(draw.holds.discards().any(fills_gap))
}
