//! High-score persistence behind the [`ScoreStore`] seam.

mod file_store;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;

pub use file_store::Leaderboard;

/// Entries kept on the board.
pub const LEADERBOARD_SIZE: usize = 10;
/// Longest stored name, in characters.
pub const MAX_NAME_CHARS: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Ranked top-N score storage.
pub trait ScoreStore: Send + Sync {
    /// Record a finished game. Scores of zero are ignored.
    fn record_score(&self, name: &str, score: u32) -> Result<(), AppError>;

    /// Highest first, at most [`LEADERBOARD_SIZE`] entries.
    fn top_scores(&self) -> Vec<HighScoreEntry>;
}

/// Trim and cap a submitted name. Blank names are stored as empty strings.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().chars().take(MAX_NAME_CHARS).collect()
}
