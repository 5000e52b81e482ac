use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("Invalid name '{0}'. Names may only contain letters.")]
    InvalidName(String),
    #[error("Leaderboard file {} not found", .0.display())]
    NotFound(PathBuf),
    #[error("Leaderboard file may be corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("Leaderboard file could not be accessed: {0}")]
    Io(#[from] io::Error),
    #[error("Score for {name} cannot go past {total} by {delta}")]
    ScoreOverflow { name: String, total: i64, delta: i64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerName(String);

impl PlayerName {
    // Letters only: no digits, spaces or punctuation
    pub fn new(name: &str) -> Result<Self, LeaderboardError> {
        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(LeaderboardError::InvalidName(name.to_string()));
        }
        Ok(PlayerName(name.to_string()))
    }

    pub fn get(&self) -> &str {
        &self.0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Leaderboard(HashMap<String, i64>);

impl Leaderboard {
    pub fn score(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    // Leaves the entry untouched when the sum would not fit in an i64
    pub fn add(&mut self, name: &PlayerName, delta: i64) -> Result<i64, LeaderboardError> {
        let entry = self.0.entry(name.get().to_string()).or_insert(0);
        let total = entry
            .checked_add(delta)
            .ok_or_else(|| LeaderboardError::ScoreOverflow {
                name: name.get().to_string(),
                total: *entry,
                delta,
            })?;
        *entry = total;
        Ok(total)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Highest score first, ties broken by name
    pub fn ranked(&self) -> Vec<(&str, i64)> {
        let mut entries: Vec<(&str, i64)> =
            self.0.iter().map(|(name, score)| (name.as_str(), *score)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Clone, Debug)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Leaderboard, LeaderboardError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(LeaderboardError::NotFound(self.path.clone()))
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&contents)?)
    }

    // Never fails: anything unreadable counts as an empty leaderboard
    pub fn load(&self) -> Leaderboard {
        self.try_load().unwrap_or_else(|err| {
            warn!("Falling back to an empty leaderboard: {}", err);
            Leaderboard::default()
        })
    }

    // A corrupt file is kept next to the original before it gets replaced
    fn backup_path(&self) -> PathBuf {
        let mut path = self.path.clone().into_os_string();
        path.push(".corrupt");
        PathBuf::from(path)
    }

    pub fn save(&self, name: &str, delta: i64) -> Result<Leaderboard, LeaderboardError> {
        let name = PlayerName::new(name).map_err(|err| {
            warn!("Rejected score save: {}", err);
            err
        })?;
        let mut leaderboard = match self.try_load() {
            Ok(leaderboard) => leaderboard,
            Err(LeaderboardError::NotFound(_)) => Leaderboard::default(),
            Err(LeaderboardError::Corrupt(err)) => {
                let backup = self.backup_path();
                fs::copy(&self.path, &backup)?;
                warn!(
                    "Replacing corrupt leaderboard ({}); old contents kept in {}",
                    err,
                    backup.display()
                );
                Leaderboard::default()
            }
            Err(err) => return Err(err),
        };
        let total = leaderboard.add(&name, delta).map_err(|err| {
            warn!("Rejected score save: {}", err);
            err
        })?;
        fs::write(&self.path, serde_json::to_string(&leaderboard)?)?;
        info!(name = name.get(), delta, total, "saved score");
        Ok(leaderboard)
    }
}
