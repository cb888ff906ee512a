use crate::settings::GameSettings;
use five_card_flush_core::evaluator::{classify_flush, get_card_pairs, like_value_score};
use five_card_flush_core::{Card, CardError, Deck, FlushKind, HAND_SIZE};
use rand::Rng;
use std::cmp::Ordering;
use tracing::debug;

/// Two players, always. Index 0 is the first player.
pub const PLAYERS: usize = 2;

/// What happened in a single round.
#[derive(Debug, Clone)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    pub hands: [Vec<Card>; PLAYERS],
    pub flushes: [FlushKind; PLAYERS],
    /// Rank groups of two or more cards; empty for a round that ended on a flush.
    pub groups: [Vec<Vec<Card>>; PLAYERS],
    /// Running totals after this round.
    pub scores: [u32; PLAYERS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Exactly one player drew a flush; the match ended on that round.
    FlushWin { winner: usize, kind: FlushKind },
    /// Both players drew a flush in the same round, whatever the kinds.
    FlushTie { kinds: [FlushKind; PLAYERS] },
    ScoreWin { winner: usize, score: u32 },
    ScoreTie { score: u32 },
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub rounds: Vec<RoundReport>,
    pub scores: [u32; PLAYERS],
    pub outcome: MatchOutcome,
}

/// Plays one match of Five Card Flush.
///
/// Every round rebuilds and shuffles the deck, then deals a hand to each
/// player from the top. Any flush ends the match at once; otherwise repeated
/// ranks are scored and the higher total after the last round wins.
///
/// # Errors
/// Only if the evaluator rejects a hand, which a full deck never causes.
pub fn play_match<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Result<MatchReport, CardError> {
    let mut deck = Deck::new();
    let mut scores = [0u32; PLAYERS];
    let mut rounds = Vec::new();

    for round in 1..=settings.rounds {
        deck.build_new_deck();
        deck.shuffle(rng);
        let hands = [
            deck.create_hand_from_top(HAND_SIZE as isize),
            deck.create_hand_from_top(HAND_SIZE as isize),
        ];
        let flushes = [classify_flush(&hands[0])?, classify_flush(&hands[1])?];

        if let Some(outcome) = flush_outcome(flushes) {
            debug!(round, ?flushes, "match ended on a flush");
            rounds.push(RoundReport { round, hands, flushes, groups: Default::default(), scores });
            return Ok(MatchReport { rounds, scores, outcome });
        }

        let mut groups: [Vec<Vec<Card>>; PLAYERS] = Default::default();
        for (player, hand) in hands.iter().enumerate() {
            groups[player] = get_card_pairs(hand)?.into_iter().filter(|g| g.len() > 1).collect();
            scores[player] += like_value_score(hand)?;
        }
        debug!(round, ?scores, "round scored");
        rounds.push(RoundReport { round, hands, flushes, groups, scores });
    }

    Ok(MatchReport { rounds, scores, outcome: score_outcome(scores) })
}

/// Rebuilds `deck` and deals one hand per player from the top, unshuffled.
pub fn sample_draw(deck: &mut Deck) -> [Vec<Card>; PLAYERS] {
    deck.build_new_deck();
    [
        deck.create_hand_from_top(HAND_SIZE as isize),
        deck.create_hand_from_top(HAND_SIZE as isize),
    ]
}

/// `None` when neither player has a flush.
pub fn flush_outcome(flushes: [FlushKind; PLAYERS]) -> Option<MatchOutcome> {
    match (flushes[0].is_flush(), flushes[1].is_flush()) {
        (true, true) => Some(MatchOutcome::FlushTie { kinds: flushes }),
        (true, false) => Some(MatchOutcome::FlushWin { winner: 0, kind: flushes[0] }),
        (false, true) => Some(MatchOutcome::FlushWin { winner: 1, kind: flushes[1] }),
        (false, false) => None,
    }
}

pub fn score_outcome(scores: [u32; PLAYERS]) -> MatchOutcome {
    match scores[0].cmp(&scores[1]) {
        Ordering::Equal => MatchOutcome::ScoreTie { score: scores[0] },
        Ordering::Greater => MatchOutcome::ScoreWin { winner: 0, score: scores[0] },
        Ordering::Less => MatchOutcome::ScoreWin { winner: 1, score: scores[1] },
    }
}
