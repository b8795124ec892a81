use std::sync::Arc;

use actix::prelude::*;
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use crate::domain::GameState;
use crate::error::AppError;
use crate::services::StateBroadcaster;

/// Fan-out event delivered to every connected websocket session.
#[derive(Message, Clone, Debug)]
#[rtype(result = "()")]
pub enum HubEvent {
    GameState { version: u64, state: Arc<GameState> },
    GameOver { final_score: u32 },
}

/// Process-wide set of live websocket sessions.
#[derive(Default)]
pub struct WsRegistry {
    connections: DashMap<Uuid, Recipient<HubEvent>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_connection(&self, conn_id: Uuid, recipient: Recipient<HubEvent>) {
        self.connections.insert(conn_id, recipient);
        debug!(conn_id = %conn_id, connections = self.connections.len(), "[WS HUB] registered");
    }

    pub fn unregister_connection(&self, conn_id: Uuid) {
        if self.connections.remove(&conn_id).is_some() {
            debug!(conn_id = %conn_id, connections = self.connections.len(), "[WS HUB] unregistered");
        }
    }

    pub fn active_connections_count(&self) -> usize {
        self.connections.len()
    }

    /// Deliver to every live session; sessions whose actor has stopped are pruned.
    pub fn broadcast_event(&self, event: HubEvent) {
        let mut stale = Vec::new();
        for entry in self.connections.iter() {
            if entry.value().connected() {
                entry.value().do_send(event.clone());
            } else {
                stale.push(*entry.key());
            }
        }
        for conn_id in stale {
            self.unregister_connection(conn_id);
        }
    }
}

impl StateBroadcaster for WsRegistry {
    fn broadcast(&self, version: u64, state: &GameState) -> Result<(), AppError> {
        self.broadcast_event(HubEvent::GameState {
            version,
            state: Arc::new(state.clone()),
        });
        Ok(())
    }

    fn notify_game_over(&self, final_score: u32) -> Result<(), AppError> {
        self.broadcast_event(HubEvent::GameOver { final_score });
        Ok(())
    }
}
