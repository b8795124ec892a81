// WebSocket test utilities

use std::net::TcpListener;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use shapeshift_backend::middleware::request_trace::RequestTrace;
use shapeshift_backend::middleware::structured_logger::StructuredLogger;
use shapeshift_backend::routes;
use shapeshift_backend::state::app_state::AppState;
use shapeshift_backend::ws::hub::WsRegistry;

pub type ServerParts = (
    actix_web::dev::ServerHandle,
    std::net::SocketAddr,
    tokio::task::JoinHandle<Result<(), std::io::Error>>,
);

/// Start a real HTTP server on a random local port with the production routes.
///
/// Returns the handle to stop it, the bound address, and the join handle of
/// the background task running it.
pub async fn start_test_server(state: AppState) -> Result<ServerParts, Box<dyn std::error::Error>> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let state_data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state_data.clone())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .configure(routes::configure)
    })
    .workers(1)
    .listen(listener)?
    .run();

    let server_handle = server.handle();
    let join = tokio::spawn(server);

    Ok((server_handle, addr, join))
}

pub fn ws_url(addr: std::net::SocketAddr) -> String {
    format!("ws://{addr}/ws")
}

pub async fn wait_for_connections(
    registry: &WsRegistry,
    expected: usize,
    timeout: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = tokio::time::Instant::now();
    loop {
        if registry.active_connections_count() == expected {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(format!(
                "timeout waiting for active_connections_count == {expected} (got {})",
                registry.active_connections_count()
            )
            .into());
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

pub async fn stop_server(parts: ServerParts) {
    let (handle, _, join) = parts;
    handle.stop(true).await;
    let _ = join.await;
}
