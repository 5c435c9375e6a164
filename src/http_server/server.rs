//! # HTTP Server
//!
//! Main HTTP server wiring the person routes under `/api`, plus a
//! root-level health check.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::observability::Logger;
use crate::service::PersonService;
use crate::store::PersonStore;

use super::config::HttpServerConfig;
use super::person_routes::{person_routes, PersonState};

/// HTTP server for the person directory
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server over the given store with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn PersonStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(config: &HttpServerConfig, store: Arc<dyn PersonStore>) -> Router {
        let person_state = Arc::new(PersonState::new(PersonService::new(store)));

        let cors = if config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let mut origins: Vec<HeaderValue> = Vec::new();
            for origin in &config.cors_origins {
                match origin.parse() {
                    Ok(value) => origins.push(value),
                    // A config typo must not vanish without a trace.
                    Err(_) => Logger::warn("CORS_ORIGIN_REJECTED", &[("origin", origin)]),
                }
            }

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/api", person_routes(person_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info("SERVER_STARTED", &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
