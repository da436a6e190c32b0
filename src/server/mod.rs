//! # HTTP Server for Symbol Rendering
//!
//! Exposes the render pipeline over HTTP.
//!
//! ## Usage
//!
//! ```bash
//! barcraft serve --listen 0.0.0.0:8080
//! curl -X POST localhost:8080/api/render \
//!      -H 'content-type: application/json' \
//!      -d '{"content":"https://example.com","symbology":"qr","module_shape":"circle"}' \
//!      -o code.png
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Body / Query | Response |
//! |--------|------|--------------|----------|
//! | POST | `/api/render` | JSON render body | `image/png` |
//! | POST | `/api/render/logo` | multipart: `request` (JSON) + `logo` (file) | `image/png` |
//! | GET | `/api/symbologies` | | JSON |
//! | GET | `/api/palettes` | | JSON |
//! | GET | `/api/shapes` | | JSON |
//! | GET | `/api/validate` | `?content=&symbology=` | `{ valid, code }` |

mod handlers;
mod state;

pub use handlers::render::RenderBody;
pub use state::{AppState, DEFAULT_MAX_LOGO_BYTES, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::BarcraftError;

/// Headroom for the JSON part of a logo upload.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.max_logo_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/render", post(handlers::render::render))
        .route(
            "/api/render/logo",
            post(handlers::render::render_with_logo).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/symbologies", get(handlers::catalog::symbologies))
        .route("/api/palettes", get(handlers::catalog::palettes))
        .route("/api/shapes", get(handlers::catalog::shapes))
        .route("/api/validate", get(handlers::catalog::validate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use barcraft::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), barcraft::BarcraftError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), BarcraftError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            BarcraftError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(
        listen = %config.listen_addr,
        max_logo_bytes = config.max_logo_bytes,
        "barcraft HTTP server listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| BarcraftError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
