use crate::card::{Card, CardList, Rank, Suit};
use crate::error::{CardError, Result};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use tracing::trace;

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// An ordered pile of cards that can be drawn from and added to at either end.
///
/// The front of the queue is the top of the deck. A drawn hand is a plain
/// `Vec<Card>`; wrap it with [`Deck::from_cards`] to treat it as a mini-deck.
///
/// No uniqueness check is made when cards are added, so keeping the deck free
/// of duplicates is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an empty deck. Call [`Deck::build_new_deck`] to fill it.
    pub fn new() -> Deck {
        Deck { cards: VecDeque::new() }
    }

    /// Creates a deck holding `cards`, the first one on top.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Deck {
        Deck { cards: cards.into_iter().collect() }
    }

    /// Creates a full, unshuffled 52-card deck.
    pub fn standard() -> Deck {
        let mut deck = Deck::new();
        deck.build_new_deck();
        deck
    }

    /// Replaces the contents with the 52-card set, top to bottom:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    ///
    /// Whatever the deck held before is discarded.
    pub fn build_new_deck(&mut self) {
        self.cards.clear();
        self.cards.reserve(DECK_SIZE);
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                self.cards.push_back(Card::new(rank, suit));
            }
        }
        trace!(size = self.cards.len(), "built new deck");
    }

    /// Uniformly permutes the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        trace!(size = self.cards.len(), "shuffled deck");
    }

    /// Uniformly permutes a caller-owned run of cards, leaving any deck untouched.
    pub fn shuffle_cards<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
        cards.shuffle(rng);
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates from top to bottom without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// # Errors
    /// [`CardError::EmptyDeck`] if there is nothing to remove.
    pub fn remove_from_top(&mut self) -> Result<Card> {
        self.cards.pop_front().ok_or(CardError::EmptyDeck)
    }

    /// # Errors
    /// [`CardError::EmptyDeck`] if there is nothing to remove.
    pub fn remove_from_bottom(&mut self) -> Result<Card> {
        self.cards.pop_back().ok_or(CardError::EmptyDeck)
    }

    pub fn add_to_top(&mut self, card: Card) {
        self.cards.push_front(card);
    }

    pub fn add_to_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Removes up to `n` cards from the top, in the order they come off.
    ///
    /// Never fails: a non-positive `n` takes nothing, and an `n` larger than
    /// the deck takes everything that is left.
    pub fn create_hand_from_top(&mut self, n: isize) -> Vec<Card> {
        let take = clamp_count(n, self.cards.len());
        self.cards.drain(..take).collect()
    }

    /// Removes up to `n` cards from the bottom, in the order they come off
    /// (the bottom card first). Clamps `n` like [`Deck::create_hand_from_top`].
    pub fn create_hand_from_bottom(&mut self, n: isize) -> Vec<Card> {
        let take = clamp_count(n, self.cards.len());
        let start = self.cards.len() - take;
        self.cards.drain(start..).rev().collect()
    }

    /// Snapshot of the current contents, top first.
    pub fn get_copy_of_cards(&self) -> Vec<Card> {
        self.cards.iter().copied().collect()
    }
}

fn clamp_count(n: isize, available: usize) -> usize {
    usize::try_from(n).map_or(0, |n| n.min(available))
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Deck::from_cards(cards)
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CardList(&self.get_copy_of_cards()))
    }
}
