// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::combos::for_each_ksubset;

#[cfg(feature = "parallel")]
mod parallel;

/// A card parsing error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The card text is not exactly two characters.
    #[error("invalid card length {0}, expected 2 characters")]
    Length(usize),
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    Suit(char),
}

/// A video poker card.
///
/// A card is stored as its canonical code `suit * 13 + rank` in the range
/// `0..52`, the code identifies a card but has no meaning for gameplay.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(suit as u8 * 13 + rank as u8)
    }

    /// Create a card from its canonical code.
    pub fn from_code(code: u8) -> Option<Card> {
        (code < Deck::SIZE as u8).then_some(Self(code))
    }

    /// This card canonical code.
    pub fn code(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 / 13 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            3 => Suit::Spades,
            _ => panic!("Invalid card code {}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        let Some(rank) = Rank::from_index(self.0 % 13) else {
            panic!("Invalid card code {}", self.0);
        };

        rank
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(rank), Some(suit), None) => {
                Ok(Card::new(Rank::from_char(rank)?, Suit::from_char(suit)?))
            }
            _ => Err(ParseCardError::Length(s.chars().count())),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = ParseCardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses whitespace separated card codes like `"Ah Kd Tc"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Card rank.
///
/// The ace is always ordered low, ace high straights are special cased by
/// the hand evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Ace
    Ace = 0,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
}

impl Rank {
    /// Number of ranks.
    pub const COUNT: usize = 13;

    const ALL: [Rank; Rank::COUNT] = {
        use Rank::*;
        [
            Ace, Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King,
        ]
    };

    /// Returns all ranks, from ace to king.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for the given ordinal.
    pub fn from_index(index: u8) -> Option<Rank> {
        Self::ALL.get(index as usize).copied()
    }

    /// The rank ordinal, ace is 0 and king is 12.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Checks if this rank pays a Jacks or Better pair.
    pub fn is_high(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King | Rank::Ace)
    }

    fn from_char(c: char) -> Result<Rank, ParseCardError> {
        let rank = match c {
            'A' => Rank::Ace,
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            _ => return Err(ParseCardError::Rank(c)),
        };

        Ok(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        };

        write!(f, "{rank}")
    }
}

/// Card suit, suits have no order when playing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    fn from_char(c: char) -> Result<Suit, ParseCardError> {
        match c {
            'c' => Ok(Suit::Clubs),
            'd' => Ok(Suit::Diamonds),
            'h' => Ok(Suit::Hearts),
            's' => Ok(Suit::Spades),
            _ => Err(ParseCardError::Suit(c)),
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 1 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=5).contains(&k), "1 <= k <= 5");

        let mut hand = Vec::with_capacity(k);
        for_each_ksubset(self.cards.len(), k, |positions| {
            hand.clear();
            hand.extend(positions.iter().map(|&pos| self.cards[pos]));
            f(&hand);
        });
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut codes = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.code() % 13, card.rank() as u8);
            assert_eq!(card.code() / 13, card.suit() as u8);
            assert_eq!(Card::from_code(card.code()), Some(card));
            codes.insert(card.code());
        }

        // Check uniquness.
        assert_eq!(codes.len(), Deck::SIZE);
        assert!(codes.iter().all(|&c| c < 52));
        assert_eq!(Card::from_code(52), None);

        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).code(), 0);
        assert_eq!(Card::new(Rank::King, Suit::Clubs).code(), 12);
        assert_eq!(Card::new(Rank::Ace, Suit::Diamonds).code(), 13);
        assert_eq!(Card::new(Rank::King, Suit::Spades).code(), 51);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "Ah");
        assert_eq!(format!("{c:?}"), "Card(Ah)");
    }

    #[test]
    fn card_parse() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        assert_eq!("Qh".parse(), Ok(Card::new(Rank::Queen, Suit::Hearts)));
        assert_eq!("".parse::<Card>(), Err(ParseCardError::Length(0)));
        assert_eq!("A".parse::<Card>(), Err(ParseCardError::Length(1)));
        assert_eq!("Ahh".parse::<Card>(), Err(ParseCardError::Length(3)));
        assert_eq!("1h".parse::<Card>(), Err(ParseCardError::Rank('1')));
        assert_eq!("th".parse::<Card>(), Err(ParseCardError::Rank('t')));
        assert_eq!("AH".parse::<Card>(), Err(ParseCardError::Suit('H')));
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::Suit('x')));
    }

    #[test]
    fn cards_list_parse() {
        let cards = parse_cards("Ac  Kc Qc\tJc Tc").unwrap();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[4], Card::new(Rank::Ten, Suit::Clubs));

        assert_eq!(parse_cards("Ac Kx"), Err(ParseCardError::Suit('x')));
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Ten, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"Ts\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        assert!(serde_json::from_str::<Card>("\"Tx\"").is_err());
    }

    #[test]
    fn rank_index() {
        for (idx, rank) in Rank::ranks().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx as u8), Some(rank));
        }
        assert_eq!(Rank::from_index(13), None);

        let high = Rank::ranks().filter(|r| r.is_high()).collect::<Vec<_>>();
        assert_eq!(high, vec![Rank::Ace, Rank::Jack, Rank::Queen, Rank::King]);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }
}
