mod display;
mod game;
mod settings;

use five_card_flush_core::{Deck, rng};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::settings::GameSettings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout belongs to the game; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let settings = GameSettings::resolve(std::env::args().nth(1))?;
    info!(rounds = settings.rounds, seed = ?settings.seed, "settings loaded");

    let mut rng = match settings.seed {
        Some(seed) => rng::seeded(seed),
        None => rng::from_entropy(),
    };

    if settings.preview_deck {
        println!("Some setup and testing...");
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);
        display::print_deck_preview(deck.clone());
        display::print_sample_draw(&mut deck);
    }

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut matches_played = 0u32;

    loop {
        display::print_intro();

        let Some(line) = stdin.next_line().await? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        let report = game::play_match(&settings, &mut rng)?;
        matches_played += 1;
        debug!(matches_played, outcome = ?report.outcome, "match finished");
        display::print_match(&settings, &report);
    }

    info!(matches_played, "exiting");
    Ok(())
}
