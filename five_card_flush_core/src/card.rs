use crate::error::CardError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

// --- Core data types ---

/// Suit of a card. Two suits are red and two are black.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

/// Display color of a suit.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

/// Rank of a card.
/// The discriminant is the numeric value used for scoring; Ace is always high (14).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

/// A single playing card.
///
/// Equality is full identity (rank and suit). Cards have no `Ord`; sort them
/// by rank with [`Card::cmp_rank`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Suit {
    /// The four suits in the order a fresh deck is built.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    pub fn color(self) -> CardColor {
        match self {
            Suit::Diamonds | Suit::Hearts => CardColor::Red,
            Suit::Clubs | Suit::Spades => CardColor::Black,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl Rank {
    /// All thirteen ranks, low to high.
    pub const ALL: [Rank; 13] = [
        Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven,
        Rank::Eight, Rank::Nine, Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace,
    ];

    /// Numeric value, 2..=14.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Display label: "2".."10", then the face names.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn label(&self) -> &'static str {
        self.rank.label()
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// Compares two cards by rank only; suits are ignored.
    pub fn cmp_rank(a: &Card, b: &Card) -> Ordering {
        a.rank.cmp(&b.rank)
    }
}

// --- Display ---

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Card {
    /// Renders as `Queen of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Display adapter for a run of cards: `[2 of Clubs] [Ace of Spades]`.
pub struct CardList<'a>(pub &'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "[{}]", card)?;
        }
        Ok(())
    }
}
