use std::time::Duration;

use actix_cors::Cors;
use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use portfolio_api::{
    background_task::start_limiter_eviction, db::postgres::create_pool,
    graceful_shutdown::shutdown_signal, routes::configure_routes, settings::AppConfig, AppState,
};

fn build_cors(origins: &[String]) -> Cors {
    if origins.iter().any(|o| o == "*") {
        return Cors::permissive();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config.database_url)
        .await
        .expect("Failed to create database connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let (state, limiter) =
        AppState::new(&config, pool.clone()).expect("Failed to build application state");
    let app_state = web::Data::new(state);
    let admin_auth = web::Data::new(AppState::admin_auth(&config));

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let cors_origins = config.cors_origins();
    let rate_window = Duration::from_secs(config.contact_rate_window_secs);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(admin_auth.clone())
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_origins))
            .wrap(NormalizePath::trim())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(server_addr)?
    .run();

    tokio::spawn(start_limiter_eviction(limiter, rate_window));

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => Ok(()),
    }
}
