//! # casactl: Property Listings Service
//!
//! `casactl` is a small control plane for real-estate listings: a REST API
//! over an in-memory repository of property records, paired with a client-side
//! store that mirrors server state for a UI process.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer. A request flows through route handlers ([`api::handlers`]),
//! which validate path and body input ([`validation`]) before anything touches
//! business logic, into the service layer ([`service`]), which orchestrates
//! the repository ([`store`]) and maps internal records to response DTOs
//! ([`api::models`]). The repository owns the collection behind a lock; every
//! mutation completes synchronously within one handler's turn, so there is no
//! cross-request coordination beyond last-write-wins.
//!
//! Storage is in-memory only: state does not survive a restart, and the
//! collection is reseeded with fixed sample listings on startup (configurable).
//! The repository sits behind an async trait ([`store::Repository`]) so a
//! persistent implementation can replace it without touching the service.
//!
//! The [`client`] module is the other half of the system: a `reqwest`-based
//! API client plus a [`client::PropertyStore`] holding the listing slice and
//! loading/error flags, with an explicit offline-fallback capability.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use casactl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = casactl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     casactl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config)?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod openapi;
pub mod service;
pub mod store;
pub mod telemetry;
#[cfg(test)]
pub mod test_utils;
pub mod types;
pub mod validation;

use crate::openapi::ApiDoc;
use crate::service::PropertyService;
use crate::store::Properties;
use axum::{
    routing::get,
    Json, Router,
};
use bon::Builder;
pub use config::Config;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::PropertyId;

/// Application state shared across all request handlers.
///
/// Constructed once at startup and cloned into every handler; there are no
/// module-level singletons.
#[derive(Clone, Builder)]
pub struct AppState {
    pub service: PropertyService,
    pub config: Config,
}

/// Health check payload.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Fully permissive CORS: any origin, method, and header. Preflight OPTIONS
/// requests are answered by the layer itself.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

/// Build the application router with all routes, documentation, and layers.
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route(
            "/items",
            get(api::handlers::properties::list_properties).post(api::handlers::properties::create_property),
        )
        .route(
            "/items/{id}",
            get(api::handlers::properties::get_property)
                .put(api::handlers::properties::update_property)
                .delete(api::handlers::properties::delete_property),
        )
        .with_state(state.clone());

    let router = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .merge(api_routes)
        .layer(create_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    Ok(router)
}

/// The assembled application: router plus the configuration it was built from.
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance with all resources initialized.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let repository = if config.seed_data {
            Properties::with_sample_data()?
        } else {
            Properties::new()
        };

        let state = AppState::builder()
            .service(PropertyService::new(repository))
            .config(config.clone())
            .build();

        let router = build_router(&state)?;

        Ok(Self { router, config })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application until the shutdown future resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Property listings service listening on http://{bind_addr}");

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
