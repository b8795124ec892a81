use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use time::OffsetDateTime;
use tracing::{error, info, warn};

use super::{HighScoreEntry, ScoreStore, LEADERBOARD_SIZE};
use crate::error::AppError;

/// In-memory board, optionally mirrored to a pretty-printed JSON file.
pub struct Leaderboard {
    entries: RwLock<Vec<HighScoreEntry>>,
    path: Option<PathBuf>,
}

impl Leaderboard {
    /// A board that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            path: None,
        }
    }

    /// Load from `path`. A missing file starts an empty board; an unreadable
    /// or corrupt one is logged and also starts empty. Never fails.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(Some(entries)) => {
                info!(path = %path.display(), entries = entries.len(), "Loaded leaderboard");
                entries
            }
            Ok(None) => {
                info!(path = %path.display(), "No leaderboard file yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Leaderboard file unreadable, starting empty");
                Vec::new()
            }
        };

        Self {
            entries: RwLock::new(entries),
            path: Some(path),
        }
    }
}

impl ScoreStore for Leaderboard {
    fn record_score(&self, name: &str, score: u32) -> Result<(), AppError> {
        if score == 0 {
            return Ok(());
        }

        let mut entries = self.entries.write();
        let previous = entries.clone();

        entries.push(HighScoreEntry {
            name: name.to_string(),
            score,
            date: OffsetDateTime::now_utc(),
        });
        rank(&mut entries);

        if let Some(path) = &self.path {
            if let Err(e) = write_entries(path, &entries) {
                warn!(path = %path.display(), error = %e, "Failed to persist leaderboard, keeping previous board");
                *entries = previous;
                return Err(e);
            }
        }

        info!(score, entries = entries.len(), "Recorded score");
        Ok(())
    }

    fn top_scores(&self) -> Vec<HighScoreEntry> {
        self.entries.read().clone()
    }
}

/// Highest first; equal scores keep insertion order. Caps the length.
fn rank(entries: &mut Vec<HighScoreEntry>) {
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_SIZE);
}

fn read_entries(path: &Path) -> Result<Option<Vec<HighScoreEntry>>, AppError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut entries: Vec<HighScoreEntry> = serde_json::from_str(&raw)?;
    entries.retain(|e| e.score > 0);
    rank(&mut entries);
    Ok(Some(entries))
}

/// Write to a sibling temp file, then rename over the target.
fn write_entries(path: &Path, entries: &[HighScoreEntry]) -> Result<(), AppError> {
    let json = serde_json::to_vec_pretty(entries)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
