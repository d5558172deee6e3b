//! DTED Service - HTTP microservice for terrain elevation queries.
//!
//! A REST API for querying altitudes from DTED tile sets.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `DTED_DATA_DIR` | Directory containing .dtN tile files | Required |
//! | `DTED_PORT` | HTTP server port | 8080 |
//! | `DTED_DOWNLOAD_URL` | URL template for fetching tiles over HTTP | None |
//! | `RUST_LOG` | Log level (e.g. "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `GET /elevation?lat=X&lon=Y[&interpolate=true]` - Altitude at coordinates
//! - `POST /elevation` - Enrich a GeoJSON geometry with altitudes
//! - `GET /health` - Health check
//! - `GET /stats` - Tile cache statistics
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use dted::TerrainBuilder;
use dted_service::{handlers, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the DTED service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DTED Elevation Service",
        version = "0.1.0",
        description = "REST API for querying terrain altitudes from DTED tile sets.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::get_altitude,
        handlers::post_altitude,
        handlers::health_check,
        handlers::get_stats,
    ),
    components(
        schemas(
            handlers::AltitudeResponse,
            handlers::InterpolatedAltitudeResponse,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            handlers::StatsResponse,
        )
    ),
    tags(
        (name = "elevation", description = "Altitude query endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dted_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load port from environment (service-specific config)
    let port: u16 = std::env::var("DTED_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    // Build the terrain engine from environment variables using the library
    // (DTED_DATA_DIR, DTED_DOWNLOAD_URL)
    let terrain = match TerrainBuilder::from_env() {
        Ok(builder) => builder.build()?,
        Err(_) => {
            // Fallback: DTED_DATA_DIR not set, use current directory
            tracing::warn!("DTED_DATA_DIR not set, using current directory");
            TerrainBuilder::new().data_dir(".").build()?
        }
    };

    tracing::info!(port = port, "Starting DTED service");

    let state = Arc::new(AppState { terrain });

    // Build router
    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(
            "/elevation",
            get(handlers::get_altitude).post(handlers::post_altitude),
        )
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
