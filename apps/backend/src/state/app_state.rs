use std::sync::Arc;

use crate::leaderboard::ScoreStore;
use crate::services::GameSession;
use crate::ws::hub::WsRegistry;

/// Shared resources handed to every handler and websocket session.
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameSession>,
    pub leaderboard: Arc<dyn ScoreStore>,
    pub websocket_registry: Arc<WsRegistry>,
}

impl AppState {
    pub fn new(
        game: Arc<GameSession>,
        leaderboard: Arc<dyn ScoreStore>,
        websocket_registry: Arc<WsRegistry>,
    ) -> Self {
        Self {
            game,
            leaderboard,
            websocket_registry,
        }
    }

    pub fn websocket_registry(&self) -> Arc<WsRegistry> {
        self.websocket_registry.clone()
    }
}
