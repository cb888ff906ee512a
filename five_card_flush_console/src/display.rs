use crate::game::{self, MatchOutcome, MatchReport, RoundReport};
use crate::settings::GameSettings;
use crossterm::style::{Color, Stylize, style};
use five_card_flush_core::{CardList, Deck};

// --- Palette ---

const INFO_COLOR: Color = Color::Green;
const TIE_COLOR: Color = Color::DarkCyan;
const FLUSH_COLOR: Color = Color::Red;
const FLUSH_TIE_COLOR: Color = Color::Magenta;
const WIN_COLOR: Color = Color::DarkYellow;

pub fn print_colored(message: &str, color: Color) {
    println!("{}", style(message).with(color));
}

pub fn print_intro() {
    print_colored(
        "\nBeginning game of Five Card Flush. Flush of any kind wins the game instantly, most of a kind takes the round.",
        INFO_COLOR,
    );
    print_colored(
        "Rounds are capped, two of a kind takes that total value for scoring and so on. Total score wins if no flush encountered.",
        INFO_COLOR,
    );
    println!("Press Enter to begin... (Q to exit)");
}

/// Deals out a whole deck, numbering every card as it comes off the top.
pub fn print_deck_preview(mut deck: Deck) {
    println!("Num Cards: {}", deck.size());
    let mut i = 0;
    while let Ok(card) = deck.remove_from_top() {
        println!("[{}] {}", i, card);
        i += 1;
    }
}

/// Shows what the first two hands of an unshuffled deck look like.
pub fn print_sample_draw(deck: &mut Deck) {
    let [one, two] = game::sample_draw(deck);
    println!("\nSample draw for hand one has the cards:");
    println!("{}", CardList(&one));
    println!("\nSample draw for hand two has the cards:");
    println!("{}", CardList(&two));
}

pub fn print_match(settings: &GameSettings, report: &MatchReport) {
    let names = settings.player_names();
    for round in &report.rounds {
        print_round(&names, round);
    }

    match &report.outcome {
        MatchOutcome::FlushWin { winner, .. } => {
            print_colored("\nFlush!", FLUSH_COLOR);
            print_colored(&format!("Winner! {}.", names[*winner]), FLUSH_COLOR);
        }
        MatchOutcome::FlushTie { .. } => {
            print_colored("\nFlush!", FLUSH_COLOR);
            print_colored(&format!("TIE! {} and {} tied.", names[0], names[1]), FLUSH_TIE_COLOR);
        }
        MatchOutcome::ScoreTie { score } => {
            print_colored(&format!("TIED: duplicate score of {}", score), TIE_COLOR);
        }
        MatchOutcome::ScoreWin { winner, score } => {
            print_colored(&format!("Winner! {}. Score: {}", names[*winner], score), WIN_COLOR);
        }
    }
}

fn print_round(names: &[&str; 2], round: &RoundReport) {
    for (player, name) in names.iter().enumerate() {
        let kind = round.flushes[player];
        if kind.is_flush() {
            let hand = &round.hands[player];
            print_colored(&format!("\n{} of {} on hand {} !", kind, hand[0].suit, name), INFO_COLOR);
            println!("Cards in hand: {}", CardList(hand));
            continue;
        }
        for group in &round.groups[player] {
            println!(
                "Round {} {} has Hand {} {}'s of a kind.",
                round.round,
                name,
                group.len(),
                group[0].label()
            );
        }
    }
}
