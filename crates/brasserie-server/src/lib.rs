//! HTTP server assembly for the Brasserie back office.
//!
//! Mounts [`brasserie_api::api_router`] under `/api` with request tracing.
//! Configuration lives in [`config`].

pub mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use axum::Router;
use brasserie_core::store::RestaurantStore;
use tower_http::trace::TraceLayer;

/// Build the complete application router for `store`.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RestaurantStore + 'static,
{
  Router::new()
    .nest("/api", brasserie_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
