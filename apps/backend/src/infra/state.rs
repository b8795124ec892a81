use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::domain::GameState;
use crate::leaderboard::{Leaderboard, ScoreStore};
use crate::services::GameSession;
use crate::state::app_state::AppState;
use crate::ws::hub::WsRegistry;

enum LeaderboardSource {
    InMemory,
    File(PathBuf),
    Custom(Arc<dyn ScoreStore>),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    leaderboard: LeaderboardSource,
    seed: Option<u64>,
    initial_state: Option<GameState>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            leaderboard: LeaderboardSource::InMemory,
            seed: None,
            initial_state: None,
        }
    }

    /// Use an already constructed score store.
    pub fn with_leaderboard(mut self, store: Arc<dyn ScoreStore>) -> Self {
        self.leaderboard = LeaderboardSource::Custom(store);
        self
    }

    /// Load and persist the leaderboard at `path`.
    pub fn with_leaderboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.leaderboard = LeaderboardSource::File(path.into());
        self
    }

    /// Seed the session RNG so generation and replacement choices repeat.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from a given state instead of generating a grid.
    pub fn with_initial_state(mut self, state: GameState) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn build(self) -> AppState {
        let leaderboard: Arc<dyn ScoreStore> = match self.leaderboard {
            LeaderboardSource::InMemory => Arc::new(Leaderboard::in_memory()),
            LeaderboardSource::File(path) => Arc::new(Leaderboard::load(path)),
            LeaderboardSource::Custom(store) => store,
        };

        let rng = match self.seed {
            Some(seed) => {
                info!(seed, "Seeding game RNG");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        let registry = Arc::new(WsRegistry::new());
        let game = match self.initial_state {
            Some(state) => GameSession::resume(state, rng, leaderboard.clone(), registry.clone()),
            None => GameSession::new(rng, leaderboard.clone(), registry.clone()),
        };

        AppState::new(Arc::new(game), leaderboard, registry)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
