//! # Five Card Flush core
//!
//! A 52-card deck that can be built, shuffled and drawn from either end, plus
//! pure functions that classify a five-card hand into the flush family and
//! group its cards by rank.
//!
//! The deck and the evaluator never reference each other: a hand is any
//! `&[Card]` of length five, usually taken with [`Deck::create_hand_from_top`].
//! Randomness is always passed in (see [`rng`]), so a seeded generator makes
//! every shuffle reproducible.

mod card;
mod deck;
mod error;
pub mod evaluator;
pub mod rng;

pub use card::*;

pub use deck::*;

pub use error::{CardError, Result};

pub use evaluator::{FlushKind, HAND_SIZE};
