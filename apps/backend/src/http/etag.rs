//! ETag helpers for conditional reads of the game state.
//!
//! The session bumps a version on every state change, so the ETag is
//! `"game-v{version}"` (quoted, as HTTP requires).

/// Strong ETag for the given state version.
pub fn game_etag(version: u64) -> String {
    format!(r#""game-v{version}""#)
}

/// True when an `If-None-Match` header value matches `etag`.
///
/// Handles `*`, comma-separated lists and weak (`W/`) validators, which
/// compare weakly for GET per RFC 9110.
pub fn if_none_match_hits(header_value: &str, etag: &str) -> bool {
    header_value.split(',').map(str::trim).any(|candidate| {
        candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
    })
}
