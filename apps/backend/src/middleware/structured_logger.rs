//! Request completion logging, tagged by game surface.
//!
//! Every request yields one event carrying its [`Surface`], status and
//! duration. Server errors log at `error` and client errors at `warn`.
//! Websocket upgrades log `socket_upgraded` and health probes drop to
//! `debug`. Expects [`crate::middleware::RequestTrace`] to wrap it.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, error, info, warn};

use crate::middleware::request_trace::TraceId;

/// Which part of the service a request touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Health,
    GameState,
    Click,
    ScoreSubmit,
    Leaderboard,
    Socket,
    Other,
}

impl Surface {
    pub fn classify(method: &Method, path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match (method, path) {
            (&Method::GET, "/health") => Self::Health,
            (&Method::GET, "/api/game") => Self::GameState,
            (&Method::POST, "/api/game/clicks") => Self::Click,
            (&Method::POST, "/api/game/scores") => Self::ScoreSubmit,
            (&Method::GET, "/api/leaderboard") => Self::Leaderboard,
            (&Method::GET, "/ws") => Self::Socket,
            _ => Self::Other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::GameState => "game_state",
            Self::Click => "click",
            Self::ScoreSubmit => "score_submit",
            Self::Leaderboard => "leaderboard",
            Self::Socket => "socket",
            Self::Other => "other",
        }
    }
}

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let surface = Surface::classify(req.method(), req.path());
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|t| t.0.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            log_completion(surface, &path, status, start, &trace_id);

            result
        })
    }
}

fn log_completion(
    surface: Surface,
    path: &str,
    status: StatusCode,
    start: Instant,
    trace_id: &str,
) {
    let status_code = status.as_u16();
    let duration_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX);
    let name = surface.as_str();

    if status.is_server_error() {
        error!(surface = name, url.path = %path, http.status_code = status_code, duration_us, trace_id, "request_completed");
    } else if status.is_client_error() {
        warn!(surface = name, url.path = %path, http.status_code = status_code, duration_us, trace_id, "request_completed");
    } else {
        match surface {
            Surface::Socket if status == StatusCode::SWITCHING_PROTOCOLS => {
                info!(surface = name, trace_id, "socket_upgraded");
            }
            Surface::Health => {
                debug!(surface = name, http.status_code = status_code, duration_us, "request_completed");
            }
            _ => {
                info!(
                    surface = name,
                    url.path = %path,
                    http.status_code = status_code,
                    not_modified = status == StatusCode::NOT_MODIFIED,
                    duration_us,
                    trace_id,
                    "request_completed"
                );
            }
        }
    }
}
