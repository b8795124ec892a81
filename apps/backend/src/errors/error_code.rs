//! Error codes for the Shapeshift backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem+json responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Score outside the accepted range
    InvalidScore,
    /// Malformed body or unsupported payload
    BadRequest,

    // Leaderboard persistence
    /// Leaderboard file could not be written
    LeaderboardIo,
    /// Leaderboard file exists but could not be parsed
    LeaderboardCorrupt,

    // System Errors
    Internal,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidScore => "INVALID_SCORE",
            Self::BadRequest => "BAD_REQUEST",
            Self::LeaderboardIo => "LEADERBOARD_IO",
            Self::LeaderboardCorrupt => "LEADERBOARD_CORRUPT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
