//! # HTTP Server
//!
//! Combines the route modules into one Axum router and serves it.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::PersonStore;

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::openapi::{openapi_routes, OPENAPI_PATH};
use super::pessoa_routes::pessoa_routes;

/// Build the application router around an existing store
pub fn app_router(store: Arc<PersonStore>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(openapi_routes())
        .merge(pessoa_routes(store))
}

/// HTTP server for the pessoa API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with an empty store
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_store(config, Arc::new(PersonStore::new()))
    }

    /// Create a new HTTP server serving `store`
    pub fn with_store(config: HttpServerConfig, store: Arc<PersonStore>) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router(config: &HttpServerConfig, store: Arc<PersonStore>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(e) => {
                        tracing::warn!(%origin, error = %e, "skipping invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        app_router(store)
            .layer(TraceLayer::new_for_http())
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

    /// Bind the configured host and port. The host may be a name, which is
    /// resolved, or an IPv4/IPv6 literal.
    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind((self.config.host.as_str(), self.config.port))
            .await
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", self.socket_addr(), e)))
    }

    /// Serve on an already bound listener until ctrl-c
    pub async fn serve(self, listener: TcpListener) -> io::Result<()> {
        let local = listener.local_addr()?;

        tracing::info!(%local, "pessoa-api listening");
        tracing::info!("  GET    /pessoa/{{id}}");
        tracing::info!("  GET    /pessoas?id=&nome=&idade=");
        tracing::info!("  POST   /pessoas");
        tracing::info!("  PUT    /pessoas/{{id}}");
        tracing::info!("  DELETE /pessoas/{{id}}");
        tracing::info!("  GET    {}", OPENAPI_PATH);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("pessoa-api stopped");
        Ok(())
    }

    /// Bind and serve until ctrl-c
    pub async fn start(self) -> io::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c, serving until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
