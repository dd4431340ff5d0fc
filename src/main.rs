use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;
mod domain;
mod metrics;
mod store;

use config::Config;
use store::OrderStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize structured logging with environment-based filtering
    // RUST_LOG wins over the configured default, e.g. RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level))
        )
        .init();

    tracing::info!("🚀 Starting food delivery order service");

    // === 1. Shared state: one store and one metrics registry for the whole process ===
    let store = web::Data::new(OrderStore::new());

    tracing::info!("Initializing metrics");
    let metrics = web::Data::new(metrics::Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    // === 2. HTTP server ===
    let (host, port) = config.bind_addr();
    tracing::info!("📡 Listening on http://{}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            // Last wrap runs first, so the logger sees the normalized path
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(store.clone())
            .app_data(metrics.clone())
            .configure(api::configure)
            .configure(metrics::configure)
    })
    .bind((host, port))?;

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.run().await?;

    tracing::info!("👋 Order service stopped");

    Ok(())
}
