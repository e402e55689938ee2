// src/bin/api_server.rs

use library_api::infra::logging;
use library_api::transport;
use library_api::{LibraryConfig, LibraryService};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // --- Configuration ---
    let config = LibraryConfig::from_env()?;
    info!(
        bind_addr = %config.bind_addr,
        publications = ?config.rules.allowed_publications,
        min_published_year = config.rules.min_published_year,
        seed_fixtures = config.seed_fixtures,
        "configuration loaded"
    );

    // --- Service Initialization ---
    let library = LibraryService::new(config.rules.clone());
    if config.seed_fixtures {
        library.seed_fixtures().await?;
    }
    let app_state = transport::http::AppState::new(library);

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "API server listening (Swagger UI at /swagger-ui)");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            info!("shutdown signal received");
        })
        .await?;

    info!("graceful shutdown complete");
    Ok(())
}
