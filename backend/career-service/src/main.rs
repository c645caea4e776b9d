use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_service::handlers::{self, RecommendationHandlerState};
use career_service::{Catalog, Config, Lexicon, RecommendationEngine};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    // Initialize tracing
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},actix_web=info", config.log_level)));
    let registry = tracing_subscriber::registry().with(env_filter);
    if config.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting career-service v{}", env!("CARGO_PKG_VERSION"));

    // Reference data
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load career catalog from {}", path))?,
        None => Catalog::reference().context("Failed to load bundled career catalog")?,
    };
    let lexicon = Lexicon::standard().context("Failed to load reference tables")?;

    tracing::info!(
        careers = catalog.len(),
        categories = catalog.categories().len(),
        archetypes = lexicon.archetypes().len(),
        "Reference data loaded"
    );

    let engine = Arc::new(RecommendationEngine::new(Arc::new(catalog), Arc::new(lexicon)));
    let state = web::Data::new(RecommendationHandlerState {
        engine,
        default_top_n: config.default_top_n,
    });

    let bind_address = config.bind_address();
    tracing::info!("Starting HTTP server at {}:{}", bind_address.0, bind_address.1);

    let cors_origins = config.cors_allowed_origins.clone();
    HttpServer::new(move || {
        let mut cors = Cors::default();
        for origin in cors_origins.split(',') {
            let origin = origin.trim();
            if origin == "*" {
                cors = cors.allow_any_origin();
            } else if !origin.is_empty() {
                cors = cors.allowed_origin(origin);
            }
        }
        cors = cors.allow_any_method().allow_any_header().max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(handlers::configure_routes)
    })
    .bind(bind_address)
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server error")?;

    tracing::info!("career-service shut down");
    Ok(())
}
