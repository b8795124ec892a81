use actix_web::{web, HttpResponse};

use crate::state::app_state::AppState;

/// GET /api/leaderboard
///
/// Top entries, highest score first.
async fn get_leaderboard(app_state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(app_state.leaderboard.top_scores())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_leaderboard));
}
