use actix_web::web;

use crate::ws::session;

pub mod game;
pub mod health;
pub mod leaderboard;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Leaderboard routes: /api/leaderboard
    cfg.service(web::scope("/api/leaderboard").configure(leaderboard::configure_routes));

    // Game routes: /api/game/**
    cfg.service(web::scope("/api/game").configure(game::configure_routes));

    // Realtime: /ws
    cfg.service(web::resource("/ws").route(web::get().to(session::upgrade)));
}
