use actix_web::{web, App, HttpServer};
use shapeshift_backend::config::server::ServerConfig;
use shapeshift_backend::infra::state::build_state;
use shapeshift_backend::middleware::cors::cors_middleware;
use shapeshift_backend::middleware::request_trace::RequestTrace;
use shapeshift_backend::middleware::structured_logger::StructuredLogger;
use shapeshift_backend::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(config.log_format);

    let builder = match &config.leaderboard_path {
        Some(path) => build_state().with_leaderboard_path(path.clone()),
        None => build_state(),
    };
    let data = web::Data::new(builder.build());

    tracing::info!(
        host = %config.host,
        port = config.port,
        leaderboard = ?config.leaderboard_path,
        "Starting Shapeshift backend"
    );

    let origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
