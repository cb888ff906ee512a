use thiserror::Error;

/// Errors raised by the deck and the hand evaluator.
///
/// Every error is returned straight to the caller; nothing here is transient,
/// so nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("hand must contain exactly {expected} cards, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },

    #[error("cannot remove a card from an empty deck")]
    EmptyDeck,

    #[error("rank {0} is outside 2..=14")]
    InvalidRank(u8),
}

pub type Result<T> = std::result::Result<T, CardError>;
