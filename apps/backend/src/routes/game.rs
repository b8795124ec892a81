//! HTTP surface for the shared game. Each POST is the same intent as the
//! matching websocket message and triggers the same broadcasts.

use actix_web::http::header::{ETAG, IF_NONE_MATCH};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::http::etag::{game_etag, if_none_match_hits};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub row: i64,
    pub col: i64,
}

#[derive(Debug, Deserialize)]
pub struct SubmitScoreRequest {
    pub name: String,
    pub score: i64,
}

/// GET /api/game
///
/// Current state with an ETag; `If-None-Match` on the current version
/// answers `304 Not Modified` with no body.
async fn get_game(http_req: HttpRequest, app_state: web::Data<AppState>) -> HttpResponse {
    let (version, state) = app_state.game.snapshot();
    let etag = game_etag(version);

    let not_modified = http_req
        .headers()
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| if_none_match_hits(v, &etag));

    if not_modified {
        return HttpResponse::build(StatusCode::NOT_MODIFIED)
            .insert_header((ETAG, etag))
            .finish();
    }

    HttpResponse::Ok().insert_header((ETAG, etag)).json(state)
}

/// POST /api/game/clicks
async fn post_click(
    body: ValidatedJson<ClickRequest>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let reply = app_state.game.apply_click(body.row, body.col);
    HttpResponse::Ok().json(reply)
}

/// POST /api/game/scores
///
/// Records the score (when positive) and returns the new game.
async fn post_score(
    body: ValidatedJson<SubmitScoreRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SubmitScoreRequest { name, score } = body.into_inner();
    let fresh = app_state.game.submit_score(&name, score)?;
    Ok(HttpResponse::Ok().json(fresh))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(get_game));
    cfg.route("/clicks", web::post().to(post_click));
    cfg.route("/scores", web::post().to(post_score));
}
