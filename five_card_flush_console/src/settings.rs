use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a JSON settings file, used when no path is passed on the command line.
pub const SETTINGS_ENV: &str = "FIVE_CARD_FLUSH_SETTINGS";

/// Program settings. Any field missing from the settings file keeps its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Rounds per match when nobody hits a flush.
    pub rounds: u32,
    pub first_player_name: String,
    pub second_player_name: String,
    /// Fixed rng seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Print one shuffled deck, card by card, before the first match.
    pub preview_deck: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            rounds: 10,
            first_player_name: "[Player One]".to_string(),
            second_player_name: "[Player Two]".to_string(),
            seed: None,
            preview_deck: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl GameSettings {
    pub fn player_names(&self) -> [&str; 2] {
        [self.first_player_name.as_str(), self.second_player_name.as_str()]
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Picks the settings file: the first command-line argument, else
    /// [`SETTINGS_ENV`], else built-in defaults.
    pub fn resolve(arg: Option<String>) -> Result<Self, SettingsError> {
        match arg.or_else(|| std::env::var(SETTINGS_ENV).ok()) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }
}
