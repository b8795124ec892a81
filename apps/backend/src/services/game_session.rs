//! The single live game and the intents that drive it.
//!
//! Every intent takes the session mutex for its whole duration, so clicks
//! and score submissions from any worker or socket are applied one at a
//! time and observers see a consistent version sequence. Broadcasts are
//! fire-and-forget; a failing broadcaster never alters the state.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::domain::{resolve_click, ClickOutcome, GameState, RandomPairs};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::leaderboard::{normalize_name, ScoreStore};

/// Outbound notifications to connected observers.
pub trait StateBroadcaster: Send + Sync {
    fn broadcast(&self, version: u64, state: &GameState) -> Result<(), AppError>;

    fn notify_game_over(&self, final_score: u32) -> Result<(), AppError>;
}

/// What a click did, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ClickReply {
    Applied { state: GameState },
    Ignored { state: GameState },
    GameOver { final_score: u32 },
}

struct SessionInner {
    state: GameState,
    /// Bumped on every state change; drives ETags and broadcast ordering.
    version: u64,
    rng: StdRng,
}

pub struct GameSession {
    inner: Mutex<SessionInner>,
    scores: Arc<dyn ScoreStore>,
    broadcaster: Arc<dyn StateBroadcaster>,
}

impl GameSession {
    /// Fresh session on a newly generated grid. Nothing is broadcast until
    /// the first state change.
    pub fn new(
        mut rng: StdRng,
        scores: Arc<dyn ScoreStore>,
        broadcaster: Arc<dyn StateBroadcaster>,
    ) -> Self {
        let state = GameState::new_game(&mut RandomPairs(&mut rng));
        Self::resume(state, rng, scores, broadcaster)
    }

    /// Session continuing from an existing state.
    pub fn resume(
        state: GameState,
        rng: StdRng,
        scores: Arc<dyn ScoreStore>,
        broadcaster: Arc<dyn StateBroadcaster>,
    ) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                state,
                version: 0,
                rng,
            }),
            scores,
            broadcaster,
        }
    }

    /// Current version and a copy of the state.
    pub fn snapshot(&self) -> (u64, GameState) {
        let inner = self.inner.lock();
        (inner.version, inner.state.clone())
    }

    /// Replace the game with a fresh one and broadcast it.
    pub fn start(&self) -> GameState {
        let mut inner = self.inner.lock();
        self.start_locked(&mut inner)
    }

    pub fn apply_click(&self, row: i64, col: i64) -> ClickReply {
        let mut inner = self.inner.lock();
        let SessionInner { state, version, rng } = &mut *inner;

        match resolve_click(state, row, col, rng) {
            ClickOutcome::Applied { .. } => {
                *version += 1;
                self.send_state(*version, state);
                ClickReply::Applied {
                    state: state.clone(),
                }
            }
            ClickOutcome::Ignored(_) => ClickReply::Ignored {
                state: state.clone(),
            },
            ClickOutcome::GameOver { final_score } => {
                *version += 1;
                if let Err(e) = self.broadcaster.notify_game_over(final_score) {
                    warn!(error = %e, final_score, "Game-over notification failed");
                }
                ClickReply::GameOver { final_score }
            }
        }
    }

    /// Record a finished game (scores above zero only) and start a new one.
    ///
    /// The session lock is held across the leaderboard write and the restart,
    /// so no click lands between them. A write failure is logged and the new
    /// game starts anyway.
    pub fn submit_score(&self, name: &str, score: i64) -> Result<GameState, AppError> {
        let recorded = match score {
            s if s > 0 => Some(u32::try_from(s).map_err(|_| {
                AppError::invalid(ErrorCode::InvalidScore, format!("Score {s} is out of range"))
            })?),
            _ => None,
        };

        let mut inner = self.inner.lock();

        if let Some(score) = recorded {
            let name = normalize_name(name);
            if let Err(e) = self.scores.record_score(&name, score) {
                error!(error = %e, score, "Failed to record score");
            }
        }

        Ok(self.start_locked(&mut inner))
    }

    fn start_locked(&self, inner: &mut SessionInner) -> GameState {
        let SessionInner { state, version, rng } = inner;

        *state = GameState::new_game(&mut RandomPairs(rng));
        *version += 1;
        info!(version = *version, "New game started");

        self.send_state(*version, state);
        state.clone()
    }

    fn send_state(&self, version: u64, state: &GameState) {
        if let Err(e) = self.broadcaster.broadcast(version, state) {
            warn!(error = %e, version, "State broadcast failed");
        }
    }
}
