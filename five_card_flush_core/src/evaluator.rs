use crate::card::{Card, Rank};
use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every evaluator entry point requires exactly this many cards.
pub const HAND_SIZE: usize = 5;

const ROYAL_RANKS: [Rank; HAND_SIZE] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];

/// Flush family of a hand, most specific wins.
/// Variants are ordered from weakest to strongest so they compare with `Ord`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum FlushKind {
    None,
    RegularFlush,
    StraightFlush,
    RoyalFlush,
}

impl FlushKind {
    pub fn is_flush(self) -> bool {
        self != FlushKind::None
    }
}

impl fmt::Display for FlushKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            FlushKind::None => "no flush",
            FlushKind::RegularFlush => "Flush",
            FlushKind::StraightFlush => "Straight Flush",
            FlushKind::RoyalFlush => "Royal Flush",
        })
    }
}

// --- Flush predicates ---

/// All five cards share one suit.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn is_flush(hand: &[Card]) -> Result<bool> {
    check_hand_size(hand)?;
    let suit = hand[0].suit;
    Ok(hand.iter().all(|c| c.suit == suit))
}

/// A flush whose ranks, once sorted, climb by exactly one at every step.
///
/// Ace only ever counts high, so A-2-3-4-5 is not a straight flush.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn is_straight_flush(hand: &[Card]) -> Result<bool> {
    if !is_flush(hand)? {
        return Ok(false);
    }
    let sorted = sorted_by_rank(hand);
    Ok(sorted.windows(2).all(|w| w[1].rank.value() == w[0].rank.value() + 1))
}

/// A flush made of exactly 10, Jack, Queen, King, Ace.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn is_royal_flush(hand: &[Card]) -> Result<bool> {
    if !is_flush(hand)? {
        return Ok(false);
    }
    let sorted = sorted_by_rank(hand);
    Ok(sorted.iter().map(|c| c.rank).eq(ROYAL_RANKS))
}

/// Classifies the hand, testing royal before straight before plain flush
/// since the three predicates overlap.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn classify_flush(hand: &[Card]) -> Result<FlushKind> {
    let kind = if is_royal_flush(hand)? {
        FlushKind::RoyalFlush
    } else if is_straight_flush(hand)? {
        FlushKind::StraightFlush
    } else if is_flush(hand)? {
        FlushKind::RegularFlush
    } else {
        FlushKind::None
    };
    Ok(kind)
}

// --- Like-value grouping ---

/// `(rank, frequency)` for every distinct rank, in the order each rank first appears.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn count_like_values(hand: &[Card]) -> Result<Vec<(Rank, usize)>> {
    Ok(get_card_pairs(hand)?
        .iter()
        .map(|group| (group[0].rank, group.len()))
        .collect())
}

/// Groups the cards by rank. Groups come in first-seen order and keep the
/// cards in hand order, so a caller can report the actual cards of a pair.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn get_card_pairs(hand: &[Card]) -> Result<Vec<Vec<Card>>> {
    check_hand_size(hand)?;
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &card in hand {
        match groups.iter_mut().find(|g| g[0].rank == card.rank) {
            Some(group) => group.push(card),
            None => groups.push(vec![card]),
        }
    }
    Ok(groups)
}

/// The most frequent rank and its count. On a tie the rank seen first wins;
/// with no repeats at all this is just the first card's rank with count 1.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn get_max_like_value(hand: &[Card]) -> Result<(Rank, usize)> {
    let counts = count_like_values(hand)?;
    let mut best = counts[0];
    for &entry in &counts[1..] {
        if entry.1 > best.1 {
            best = entry;
        }
    }
    Ok(best)
}

/// Score of the repeated ranks: every group of two or more adds
/// `group size * rank value`. Singletons score nothing.
///
/// # Errors
/// [`CardError::InvalidHandSize`] unless `hand` holds exactly five cards.
pub fn like_value_score(hand: &[Card]) -> Result<u32> {
    Ok(get_card_pairs(hand)?
        .iter()
        .filter(|g| g.len() > 1)
        .map(|g| g.len() as u32 * u32::from(g[0].rank.value()))
        .sum())
}

// --- Helpers ---

fn check_hand_size(hand: &[Card]) -> Result<()> {
    if hand.len() != HAND_SIZE {
        return Err(CardError::InvalidHandSize { expected: HAND_SIZE, actual: hand.len() });
    }
    Ok(())
}

/// Private copy sorted low to high by rank; the caller's hand is left as is.
fn sorted_by_rank(hand: &[Card]) -> Vec<Card> {
    let mut local = hand.to_vec();
    local.sort_by(Card::cmp_rank);
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use crate::deck::Deck;
    use crate::rng::seeded;
    use Rank::*;
    use Suit::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn royal_flush() -> Vec<Card> {
        vec![card(Ten, Clubs), card(Jack, Clubs), card(Queen, Clubs), card(King, Clubs), card(Ace, Clubs)]
    }

    fn straight_flush() -> Vec<Card> {
        vec![card(Nine, Diamonds), card(Ten, Diamonds), card(Jack, Diamonds), card(Queen, Diamonds), card(King, Diamonds)]
    }

    // --- flush family ---

    #[test]
    fn test_royal_flush() {
        let mut hand = royal_flush();
        assert_eq!(is_royal_flush(&hand), Ok(true));
        for seed in 0..20 {
            Deck::shuffle_cards(&mut hand, &mut seeded(seed));
            assert_eq!(is_royal_flush(&hand), Ok(true), "order {hand:?}");
        }

        let not_royal = [card(Three, Clubs), card(King, Clubs), card(Queen, Clubs), card(Ten, Clubs), card(Ace, Clubs)];
        assert_eq!(is_royal_flush(&not_royal), Ok(false));

        assert_eq!(is_royal_flush(&straight_flush()), Ok(false));
    }

    #[test]
    fn test_royal_ranks_in_mixed_suits_are_not_royal() {
        let hand = [card(Ten, Hearts), card(Jack, Clubs), card(Queen, Clubs), card(King, Clubs), card(Ace, Clubs)];
        assert_eq!(is_royal_flush(&hand), Ok(false));
        assert_eq!(is_straight_flush(&hand), Ok(false));
    }

    #[test]
    fn test_straight_flush() {
        let mut hand = royal_flush();
        assert_eq!(is_straight_flush(&hand), Ok(true));
        Deck::shuffle_cards(&mut hand, &mut seeded(11));
        assert_eq!(is_straight_flush(&hand), Ok(true));

        assert_eq!(is_straight_flush(&straight_flush()), Ok(true));

        let gap = [card(Eight, Diamonds), card(Ten, Diamonds), card(Jack, Diamonds), card(Queen, Diamonds), card(King, Diamonds)];
        assert_eq!(is_straight_flush(&gap), Ok(false));
    }

    #[test]
    fn test_ace_low_straight_flush_is_not_recognized() {
        let wheel = [card(Ace, Spades), card(Two, Spades), card(Three, Spades), card(Four, Spades), card(Five, Spades)];
        assert_eq!(is_straight_flush(&wheel), Ok(false));
        assert_eq!(is_flush(&wheel), Ok(true));
    }

    #[test]
    fn test_flush() {
        let mut hand = royal_flush();
        assert_eq!(is_flush(&hand), Ok(true));
        Deck::shuffle_cards(&mut hand, &mut seeded(5));
        assert_eq!(is_flush(&hand), Ok(true));

        let odd_one_out = [card(Three, Diamonds), card(King, Clubs), card(Queen, Clubs), card(Ten, Clubs), card(Ace, Clubs)];
        assert_eq!(is_flush(&odd_one_out), Ok(false));
    }

    #[test]
    fn test_evaluator_does_not_reorder_input() {
        let hand = [card(Ace, Hearts), card(Ten, Hearts), card(King, Hearts), card(Jack, Hearts), card(Queen, Hearts)];
        let before = hand;
        assert_eq!(is_royal_flush(&hand), Ok(true));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_wrong_hand_size_is_rejected() {
        let royal = royal_flush();
        let four = &royal[..4];
        let mut six = royal_flush();
        six.push(card(Two, Hearts));

        for hand in [four, six.as_slice()] {
            let err = CardError::InvalidHandSize { expected: 5, actual: hand.len() };
            assert_eq!(is_flush(hand), Err(err.clone()));
            assert_eq!(is_straight_flush(hand), Err(err.clone()));
            assert_eq!(is_royal_flush(hand), Err(err.clone()));
            assert_eq!(classify_flush(hand), Err(err.clone()));
            assert_eq!(count_like_values(hand), Err(err.clone()));
            assert_eq!(get_card_pairs(hand), Err(err.clone()));
            assert_eq!(get_max_like_value(hand), Err(err.clone()));
            assert_eq!(like_value_score(hand), Err(err));
        }
        assert!(is_flush(&[]).is_err());
    }

    #[test]
    fn test_classify_most_specific_first() {
        assert_eq!(classify_flush(&royal_flush()), Ok(FlushKind::RoyalFlush));
        assert_eq!(classify_flush(&straight_flush()), Ok(FlushKind::StraightFlush));
        let plain = [card(Two, Hearts), card(Seven, Hearts), card(Nine, Hearts), card(Jack, Hearts), card(King, Hearts)];
        assert_eq!(classify_flush(&plain), Ok(FlushKind::RegularFlush));
        let none = [card(Two, Hearts), card(Seven, Hearts), card(Nine, Hearts), card(Jack, Hearts), card(King, Spades)];
        assert_eq!(classify_flush(&none), Ok(FlushKind::None));
        assert!(FlushKind::RoyalFlush > FlushKind::StraightFlush);
        assert!(!FlushKind::None.is_flush());
    }

    // --- like values ---

    #[test]
    fn test_max_like_value_pair_of_tens() {
        let hand = [card(Ten, Hearts), card(Four, Clubs), card(Ten, Spades), card(Seven, Diamonds), card(King, Clubs)];
        assert_eq!(get_max_like_value(&hand), Ok((Ten, 2)));
    }

    #[test]
    fn test_max_like_value_ties_pick_first_seen() {
        let two_pair = [card(Six, Hearts), card(Nine, Clubs), card(Nine, Spades), card(Six, Diamonds), card(Two, Clubs)];
        assert_eq!(get_max_like_value(&two_pair), Ok((Six, 2)));

        let no_pair = [card(Three, Hearts), card(Nine, Clubs), card(Jack, Spades), card(Six, Diamonds), card(Two, Clubs)];
        assert_eq!(get_max_like_value(&no_pair), Ok((Three, 1)));
    }

    #[test]
    fn test_count_like_values() {
        let hand = [card(Queen, Hearts), card(Five, Clubs), card(Queen, Spades), card(Queen, Diamonds), card(Five, Hearts)];
        assert_eq!(count_like_values(&hand), Ok(vec![(Queen, 3), (Five, 2)]));

        let singles = straight_flush();
        let counts = count_like_values(&singles).unwrap();
        assert_eq!(counts.len(), 5);
        assert!(counts.iter().all(|&(_, n)| n == 1));
    }

    #[test]
    fn test_card_pairs_keep_the_cards() {
        let hand = [card(Eight, Hearts), card(Ace, Clubs), card(Eight, Spades), card(Eight, Clubs), card(Ace, Diamonds)];
        let groups = get_card_pairs(&hand).unwrap();
        assert_eq!(groups, vec![
            vec![card(Eight, Hearts), card(Eight, Spades), card(Eight, Clubs)],
            vec![card(Ace, Clubs), card(Ace, Diamonds)],
        ]);
    }

    #[test]
    fn test_like_value_score() {
        // three eights and two aces: 3*8 + 2*14
        let full_house = [card(Eight, Hearts), card(Ace, Clubs), card(Eight, Spades), card(Eight, Clubs), card(Ace, Diamonds)];
        assert_eq!(like_value_score(&full_house), Ok(52));

        let pair = [card(Ten, Hearts), card(Four, Clubs), card(Ten, Spades), card(Seven, Diamonds), card(King, Clubs)];
        assert_eq!(like_value_score(&pair), Ok(20));

        assert_eq!(like_value_score(&royal_flush()), Ok(0));
    }
}
