use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use gigmatch::config::{LogFormat, Settings};
use gigmatch::core::Matcher;
use gigmatch::routes::{self, handle_json_payload_error, matches::AppState};
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }

    info!("Starting GigMatch scoring service...");

    // Initialize matcher with configured weights
    let weights = settings.scoring_weights();
    if (weights.sum() - 1.0).abs() > 1e-6 {
        warn!("Scoring weights sum to {:.3}, scores will not span [0, 1]", weights.sum());
    }

    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let app_state = AppState::new(matcher, settings.matching.clone());

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))
    .map_err(|e| {
        error!("Failed to bind HTTP server: {}", e);
        e
    })?
    .run()
    .await
}
